pub mod adapters;
pub mod app;
pub mod auth;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export key types for convenience

// Domain types - core entities, helpers, and errors
pub use domain::{
    format::{format_file_size, format_timestamp, source_label},
    // Errors
    GatewayError,
    GatewayResult,
    // Models
    ImageRecord,
    // Value objects
    ObjectKey,
    ValidationError,
};

// Configuration
pub use config::{ConfigLoadError, DashboardConfig};

// Port types - interfaces for the two seams
pub use ports::{BucketStore, ImageCatalog, RawObject};

// Service implementation - the live gateway
pub use services::ImageCatalogImpl;

// Application factory
pub use app::{
    create_catalog, create_catalog_from_env, create_in_memory_catalog, create_mock_catalog,
    AppError,
};

// Adapter types - infrastructure implementations
pub use adapters::outbound::{mock::MockImageCatalog, storage::ApacheObjectStoreAdapter};

// Public facade for easy construction
pub mod prelude {
    pub use crate::{
        create_catalog, create_catalog_from_env, create_in_memory_catalog, create_mock_catalog,
        ApacheObjectStoreAdapter, BucketStore, DashboardConfig, GatewayError, GatewayResult,
        ImageCatalog, ImageCatalogImpl, ImageRecord, MockImageCatalog, ObjectKey, RawObject,
    };
}
