use object_store::aws::AmazonS3Builder;
use object_store::memory::InMemory;
use std::sync::Arc;

use crate::{
    adapters::outbound::{mock::MockImageCatalog, storage::ApacheObjectStoreAdapter},
    config::{ConfigLoadError, DashboardConfig},
    ports::catalog::ImageCatalog,
    services::ImageCatalogImpl,
};

/// Application-level errors
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Storage initialization error: {message}")]
    StorageInit { message: String },
}

impl From<ConfigLoadError> for AppError {
    fn from(err: ConfigLoadError) -> Self {
        AppError::Configuration {
            message: err.to_string(),
        }
    }
}

/// Build the image catalog the configuration asks for.
///
/// Mock mode yields the fixed six-record source; otherwise the live gateway
/// is wired to the configured bucket. The choice happens exactly once here,
/// so neither implementation carries a mode check in its operations.
///
/// Placeholder or empty credentials do not fail construction: the live
/// gateway surfaces a `Config` error on its first operation instead, before
/// any network call.
pub fn create_catalog(config: DashboardConfig) -> Result<Arc<dyn ImageCatalog>, AppError> {
    if config.is_mock_mode() {
        return Ok(Arc::new(MockImageCatalog::new()));
    }

    let store = AmazonS3Builder::new()
        .with_region(&config.region)
        .with_bucket_name(&config.bucket_name)
        .with_access_key_id(&config.access_key_id)
        .with_secret_access_key(&config.secret_access_key)
        .build()
        .map_err(|e| AppError::StorageInit {
            message: e.to_string(),
        })?;

    let adapter = Arc::new(ApacheObjectStoreAdapter::new(Arc::new(store)));

    Ok(Arc::new(ImageCatalogImpl::new(config, adapter)))
}

/// Convenience functions for common configurations
///
/// Create the fixed mock catalog directly.
pub fn create_mock_catalog() -> Arc<dyn ImageCatalog> {
    Arc::new(MockImageCatalog::new())
}

/// Create a live catalog over an in-memory store, for development and
/// tests that want real normalization without a bucket.
pub fn create_in_memory_catalog(config: DashboardConfig) -> Arc<dyn ImageCatalog> {
    let store = Arc::new(InMemory::new());
    let adapter = Arc::new(ApacheObjectStoreAdapter::new(store));
    Arc::new(ImageCatalogImpl::new(config, adapter))
}

/// Create the catalog from environment variables.
pub fn create_catalog_from_env() -> Result<Arc<dyn ImageCatalog>, AppError> {
    let config = DashboardConfig::from_env()?;
    create_catalog(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_config() -> DashboardConfig {
        DashboardConfig {
            region: "us-east-1".to_string(),
            bucket_name: "unused".to_string(),
            access_key_id: String::new(),
            secret_access_key: String::new(),
            use_mock_data: true,
        }
    }

    #[tokio::test]
    async fn test_mock_config_selects_mock_catalog() {
        let catalog = create_catalog(mock_config()).unwrap();

        // The mock source answers regardless of the empty credentials.
        let records = catalog.list_images().await.unwrap();
        assert_eq!(records.len(), 6);
    }

    #[tokio::test]
    async fn test_in_memory_catalog_starts_empty() {
        let config = DashboardConfig {
            use_mock_data: false,
            access_key_id: "AKIAEXAMPLE".to_string(),
            secret_access_key: "wJalrEXAMPLEKEY".to_string(),
            ..mock_config()
        };

        let catalog = create_in_memory_catalog(config);
        assert!(catalog.list_images().await.unwrap().is_empty());
    }
}
