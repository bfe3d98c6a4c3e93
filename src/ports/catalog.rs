use crate::domain::{errors::GatewayResult, models::ImageRecord};
use async_trait::async_trait;

/// Port for the image catalog consumed by the presentation layer.
///
/// Two implementations exist: the live object-store gateway and the fixed
/// mock source. Which one a caller gets is decided once at construction
/// (see [`crate::app::create_catalog`]); the operations themselves never
/// branch on a mode flag.
#[async_trait]
pub trait ImageCatalog: Send + Sync + 'static {
    /// Fetch the current capture listing, normalized into [`ImageRecord`]s.
    ///
    /// Record ids are 1-based positions within this call's result and are
    /// not stable across calls.
    async fn list_images(&self) -> GatewayResult<Vec<ImageRecord>>;

    /// Delete the capture a listing identified as `id`.
    ///
    /// The id is re-resolved against a fresh listing, so the call performs
    /// a full list round-trip before the delete itself. Deleting an id that
    /// no fresh listing contains fails with `NotFound`.
    async fn delete_image(&self, id: &str) -> GatewayResult<()>;
}
