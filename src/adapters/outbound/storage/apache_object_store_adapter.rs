use async_trait::async_trait;
use object_store::{path::Path as ObjectPath, ObjectStore as ApacheObjectStore};
use std::sync::Arc;

use crate::{
    domain::{
        errors::{GatewayError, GatewayResult},
        value_objects::ObjectKey,
    },
    ports::store::{BucketStore, RawObject},
};

/// Adapter that implements our BucketStore port using Apache object_store
pub struct ApacheObjectStoreAdapter {
    inner: Arc<dyn ApacheObjectStore>,
}

impl ApacheObjectStoreAdapter {
    pub fn new(store: Arc<dyn ApacheObjectStore>) -> Self {
        Self { inner: store }
    }

    /// Classify an object_store error into the catalog taxonomy.
    ///
    /// Anything that is not a missing object or a rejected credential is a
    /// transport failure carrying the provider message verbatim.
    fn classify(err: object_store::Error) -> GatewayError {
        match &err {
            object_store::Error::NotFound { path, .. } => GatewayError::NotFound {
                message: format!("object not found: {}", path),
            },
            object_store::Error::PermissionDenied { .. }
            | object_store::Error::Unauthenticated { .. } => GatewayError::Auth {
                message: err.to_string(),
            },
            _ => GatewayError::Transport {
                message: err.to_string(),
            },
        }
    }
}

#[async_trait]
impl BucketStore for ApacheObjectStoreAdapter {
    async fn list_objects(&self, max_results: usize) -> GatewayResult<Vec<RawObject>> {
        let mut stream = self.inner.list(None);
        let mut objects = Vec::new();

        while let Some(result) = futures::StreamExt::next(&mut stream).await {
            if objects.len() >= max_results {
                break;
            }

            let meta = result.map_err(Self::classify)?;

            objects.push(RawObject {
                key: Some(meta.location.to_string()),
                size: meta.size,
                last_modified: Some(meta.last_modified),
            });
        }

        Ok(objects)
    }

    async fn delete_object(&self, key: &ObjectKey) -> GatewayResult<()> {
        let path = ObjectPath::from(key.as_str());

        self.inner.delete(&path).await.map_err(Self::classify)?;

        Ok(())
    }
}
