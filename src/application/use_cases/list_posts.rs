use std::sync::Arc;
use thiserror::Error;

use crate::application::dto::PostDto;
use crate::application::ports::{PostRepository, RepositoryError};
use crate::domain::value_objects::{PostId, UserId};

#[derive(Debug, Error)]
pub enum ListError {
    #[error("Post not found: {0}")]
    NotFound(String),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Use case: Read-side queries over posts
pub struct ListPostsUseCase {
    posts: Arc<dyn PostRepository>,
}

impl ListPostsUseCase {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// Home feed: all posts, newest first
    pub async fn all(&self) -> Result<Vec<PostDto>, ListError> {
        let posts = self.posts.list_newest().await?;
        Ok(posts.into_iter().map(PostDto::from).collect())
    }

    /// One author's posts, newest first
    pub async fn by_author(&self, author: &UserId) -> Result<Vec<PostDto>, ListError> {
        let posts = self.posts.list_by_author(author).await?;
        Ok(posts.into_iter().map(PostDto::from).collect())
    }

    /// Single post by id
    pub async fn get(&self, id: &PostId) -> Result<PostDto, ListError> {
        let post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| ListError::NotFound(id.to_string()))?;
        Ok(PostDto::from(post))
    }
}
