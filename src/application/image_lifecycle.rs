//! Image lifecycle policy: attach, replace, and best-effort removal of
//! post image blobs.
//!
//! Upload failures abort the triggering mutation and surface to the caller.
//! Delete failures never do: a direct delete that fails falls back to the
//! delete queue, and an enqueue that fails is logged and swallowed. Cleanup
//! is housekeeping, not a correctness requirement of the post store.

use std::sync::Arc;

use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

use crate::application::ports::{DeleteQueue, ObjectStore, StoreError};

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Image upload failed: {0}")]
    Upload(#[from] StoreError),
}

/// An image file received from a client
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Result of a successful attach
#[derive(Debug, Clone)]
pub struct StoredImage {
    pub key: String,
    pub url: String,
}

/// What happened to a blob scheduled for removal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Deleted synchronously against the object store
    Deleted,
    /// Handed to the delete queue for the worker to pick up
    Enqueued,
    /// Neither worked; the blob may leak, which is tolerated
    Abandoned,
}

/// Extract the blob key from a stored image reference.
///
/// References are full URLs (`{endpoint}/{bucket}/{key}`); the key is the
/// last non-empty path segment. Empty or separator-less input yields `None`.
pub fn image_key(url: &str) -> Option<&str> {
    let (_, tail) = url.rsplit_once('/')?;
    if tail.is_empty() {
        None
    } else {
        Some(tail)
    }
}

/// Reduce a client-supplied filename to a safe diagnostic suffix.
///
/// Keeps ASCII alphanumerics plus `.`, `-`, `_`; everything else becomes an
/// underscore. Never returns an empty string.
pub fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    // No hidden-file or bare-separator names
    let trimmed = cleaned
        .trim_start_matches(|c| c == '.' || c == '_')
        .trim_end_matches('_');
    if trimmed.is_empty() {
        "file".to_string()
    } else {
        trimmed.to_string()
    }
}

/// The policy itself, over the object store and delete queue ports
pub struct ImageLifecycle {
    store: Arc<dyn ObjectStore>,
    queue: Arc<dyn DeleteQueue>,
}

impl ImageLifecycle {
    pub fn new(store: Arc<dyn ObjectStore>, queue: Arc<dyn DeleteQueue>) -> Self {
        Self { store, queue }
    }

    /// Upload a new image under a collision-free key.
    ///
    /// Does not touch the post store. On failure exactly one side effect is
    /// possible: the failed put itself.
    pub async fn attach(&self, upload: ImageUpload) -> Result<StoredImage, ImageError> {
        let key = format!("{}_{}", Uuid::new_v4(), sanitize_filename(&upload.filename));
        let url = self
            .store
            .put(&key, upload.bytes, &upload.content_type)
            .await?;
        Ok(StoredImage { key, url })
    }

    /// Remove a blob after its post row is gone: direct delete first, queue
    /// fallback on failure. Never both when the direct delete succeeds.
    pub async fn remove(&self, image_url: &str) -> DeleteOutcome {
        let Some(key) = image_key(image_url) else {
            warn!(reference = %image_url, "malformed image reference, nothing to delete");
            return DeleteOutcome::Abandoned;
        };

        match self.store.delete(key).await {
            Ok(()) => DeleteOutcome::Deleted,
            Err(e) => {
                warn!(key, error = %e, "direct image delete failed, falling back to queue");
                self.enqueue(key).await
            }
        }
    }

    /// Best-effort enqueue of a deletion for a replaced image. Used on the
    /// edit path once the new image is durably attached.
    pub async fn schedule_delete(&self, image_url: &str) -> DeleteOutcome {
        let Some(key) = image_key(image_url) else {
            warn!(reference = %image_url, "malformed image reference, nothing to schedule");
            return DeleteOutcome::Abandoned;
        };
        self.enqueue(key).await
    }

    async fn enqueue(&self, key: &str) -> DeleteOutcome {
        match self.queue.enqueue(key).await {
            Ok(()) => DeleteOutcome::Enqueued,
            Err(e) => {
                warn!(key, error = %e, "delete enqueue failed, abandoning blob");
                DeleteOutcome::Abandoned
            }
        }
    }
}
