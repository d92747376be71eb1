use async_trait::async_trait;
use thiserror::Error;

#[cfg(test)]
use mockall::{automock, predicate::*};

#[derive(Debug, Error)]
pub enum QueueError {
    #[error("Delete queue is not configured")]
    NotConfigured,

    #[error("Enqueue failed: {0}")]
    Enqueue(String),

    #[error("Receive failed: {0}")]
    Receive(String),
}

/// Port for the asynchronous delete queue.
///
/// Messages carry the bare blob key (never the full URL). Enqueueing is
/// best-effort: callers log failures and move on.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DeleteQueue: Send + Sync {
    /// Enqueue a deletion request for `image_key`
    async fn enqueue(&self, image_key: &str) -> Result<(), QueueError>;
}
