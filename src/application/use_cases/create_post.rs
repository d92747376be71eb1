use std::sync::Arc;
use thiserror::Error;

use crate::application::dto::PostDto;
use crate::application::image_lifecycle::{ImageError, ImageLifecycle, ImageUpload};
use crate::application::ports::{PostRepository, RepositoryError};
use crate::domain::entities::Post;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::UserId;

#[derive(Debug, Error)]
pub enum CreatePostError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Image error: {0}")]
    Image(#[from] ImageError),
}

/// Use case: Create a news post, optionally with an image.
///
/// The author is an explicit parameter; the API layer resolves it from the
/// request before calling in.
pub struct CreatePostUseCase {
    posts: Arc<dyn PostRepository>,
    images: Arc<ImageLifecycle>,
}

impl CreatePostUseCase {
    pub fn new(posts: Arc<dyn PostRepository>, images: Arc<ImageLifecycle>) -> Self {
        Self { posts, images }
    }

    /// Execute create workflow
    pub async fn execute(
        &self,
        author: UserId,
        title: String,
        content: String,
        image: Option<ImageUpload>,
    ) -> Result<PostDto, CreatePostError> {
        // 1. Upload first: a failed upload must leave nothing persisted
        let image_url = match image {
            Some(upload) => Some(self.images.attach(upload).await?.url),
            None => None,
        };

        // 2. Validate and insert
        let post = Post::new(title, content, author, image_url)?;
        self.posts.insert(&post).await?;

        tracing::info!(post_id = %post.id(), author = %author, "post created");
        Ok(PostDto::from(post))
    }
}
