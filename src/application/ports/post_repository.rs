use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::Post;
use crate::domain::value_objects::{PostId, UserId};
#[cfg(test)]
use mockall::{automock, predicate::*};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Port for post persistence operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Insert a new post
    async fn insert(&self, post: &Post) -> Result<(), RepositoryError>;

    /// Find post by ID
    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, RepositoryError>;

    /// Persist an edited post
    async fn update(&self, post: &Post) -> Result<(), RepositoryError>;

    /// Delete post row; returns whether a row existed
    async fn delete(&self, id: &PostId) -> Result<bool, RepositoryError>;

    /// All posts, newest first
    async fn list_newest(&self) -> Result<Vec<Post>, RepositoryError>;

    /// All posts by one author, newest first
    async fn list_by_author(&self, author_id: &UserId) -> Result<Vec<Post>, RepositoryError>;
}
