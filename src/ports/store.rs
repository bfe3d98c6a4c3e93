use crate::domain::{errors::GatewayResult, value_objects::ObjectKey};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Port for the raw bucket operations the catalog needs.
/// This abstracts the actual storage backend (S3, in-memory, test stubs).
#[async_trait]
pub trait BucketStore: Send + Sync + 'static {
    /// List the first page of objects, at most `max_results` entries.
    /// Store-side continuation beyond that page is not followed.
    async fn list_objects(&self, max_results: usize) -> GatewayResult<Vec<RawObject>>;

    /// Delete a single object by key.
    async fn delete_object(&self, key: &ObjectKey) -> GatewayResult<()>;
}

/// One entry of a raw bucket listing, before normalization.
///
/// Key and last-modified are optional: not every store reports them, and
/// the gateway synthesizes defaults for the ones that don't.
#[derive(Debug, Clone)]
pub struct RawObject {
    pub key: Option<String>,
    pub size: u64,
    pub last_modified: Option<DateTime<Utc>>,
}
