use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info};

use crate::{
    config::DashboardConfig,
    domain::{
        errors::{GatewayError, GatewayResult},
        format::{format_file_size, source_label},
        models::ImageRecord,
        value_objects::ObjectKey,
    },
    ports::{
        catalog::ImageCatalog,
        store::{BucketStore, RawObject},
    },
};

/// Listing page cap. One page, no continuation; everything past this is
/// never fetched.
const MAX_LISTING_KEYS: usize = 50;

/// Live image catalog backed by a bucket store.
///
/// This is the only component with real logic: it gates on credential
/// presence, normalizes raw listing entries into [`ImageRecord`]s, and
/// resolves delete targets by re-listing. Configuration is an explicit
/// constructor argument and is never mutated.
#[derive(Clone)]
pub struct ImageCatalogImpl {
    config: DashboardConfig,
    store: Arc<dyn BucketStore>,
}

impl ImageCatalogImpl {
    pub fn new(config: DashboardConfig, store: Arc<dyn BucketStore>) -> Self {
        Self { config, store }
    }

    /// Presence check only; never validates the credentials against the
    /// store. Runs before any network call.
    fn ensure_credentials(&self) -> GatewayResult<()> {
        if self.config.credentials_configured() {
            Ok(())
        } else {
            Err(GatewayError::config("credentials not configured"))
        }
    }

    /// Build a record from the raw entry at 0-based listing position
    /// `index`. Ids are positional, so they only hold within the listing
    /// this call produces.
    fn normalize(&self, index: usize, raw: RawObject) -> ImageRecord {
        let filename = raw
            .key
            .unwrap_or_else(|| format!("image_{}.jpg", index));
        let timestamp = raw.last_modified.unwrap_or_else(Utc::now);
        let url = format!(
            "{}/{}",
            self.config.bucket_base_url(),
            urlencoding::encode(&filename)
        );
        let size = format_file_size(raw.size);
        let source = source_label(&filename);

        ImageRecord {
            id: (index + 1).to_string(),
            filename,
            timestamp,
            url,
            size,
            source,
        }
    }
}

#[async_trait]
impl ImageCatalog for ImageCatalogImpl {
    async fn list_images(&self) -> GatewayResult<Vec<ImageRecord>> {
        self.ensure_credentials()?;

        debug!(
            bucket = %self.config.bucket_name,
            "listing up to {} objects", MAX_LISTING_KEYS
        );

        let raw = self.store.list_objects(MAX_LISTING_KEYS).await?;

        Ok(raw
            .into_iter()
            .enumerate()
            .map(|(index, object)| self.normalize(index, object))
            .collect())
    }

    async fn delete_image(&self, id: &str) -> GatewayResult<()> {
        self.ensure_credentials()?;

        // Resolve the id against a fresh listing. Ids are positional, so a
        // listing that shifted since the caller's last fetch can resolve to
        // a different object or to nothing.
        let records = self.list_images().await?;
        let record = records
            .into_iter()
            .find(|record| record.id == id)
            .ok_or_else(|| GatewayError::not_found(format!("no image with id {}", id)))?;

        let key = ObjectKey::new(record.filename).map_err(|e| GatewayError::Transport {
            message: format!("unusable object key from listing: {}", e),
        })?;

        info!(%id, key = %key, "deleting image");

        self.store.delete_object(&key).await
    }
}
