use async_trait::async_trait;
use thiserror::Error;

#[cfg(test)]
use mockall::{automock, predicate::*};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("Object store request failed: {0}")]
    Request(String),
}

/// A blob fetched from the store
#[derive(Debug, Clone)]
pub struct StoredObject {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

/// Port for the S3-compatible object store.
///
/// Keys are opaque strings; `put` returns the public URL under which the
/// blob is reachable. `delete` treats a missing key as success — the
/// operation is inherently idempotent.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Upload bytes under `key`, returning the public URL
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StoreError>;

    /// Delete blob by key; missing keys are not an error
    async fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// Fetch blob by key (static-page origin)
    async fn get(&self, key: &str) -> Result<StoredObject, StoreError>;
}
