use std::sync::Arc;
use thiserror::Error;

use crate::application::image_lifecycle::ImageLifecycle;
use crate::application::ports::{PostRepository, RepositoryError};
use crate::domain::value_objects::{PostId, UserId};

#[derive(Debug, Error)]
pub enum DeletePostError {
    #[error("Post not found: {0}")]
    NotFound(String),

    #[error("Only the author can delete this post")]
    Forbidden,

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Use case: Delete a post and clean up its image.
///
/// The row is removed first, so a half-deleted post is never visible with a
/// dangling image reference. Blob cleanup after that point is best-effort
/// and never fails the request.
pub struct DeletePostUseCase {
    posts: Arc<dyn PostRepository>,
    images: Arc<ImageLifecycle>,
}

impl DeletePostUseCase {
    pub fn new(posts: Arc<dyn PostRepository>, images: Arc<ImageLifecycle>) -> Self {
        Self { posts, images }
    }

    /// Execute delete workflow
    pub async fn execute(&self, author: UserId, id: &PostId) -> Result<(), DeletePostError> {
        // 1. Load and authorize
        let post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DeletePostError::NotFound(id.to_string()))?;

        if !post.is_authored_by(&author) {
            return Err(DeletePostError::Forbidden);
        }

        // 2. Remove the row; a repository failure aborts before any blob work
        let existed = self.posts.delete(id).await?;
        if !existed {
            // Raced with another delete; the image is the other caller's problem
            return Err(DeletePostError::NotFound(id.to_string()));
        }

        // 3. Blob cleanup: direct delete, queue fallback
        if let Some(image_url) = post.image_url() {
            let outcome = self.images.remove(image_url).await;
            tracing::info!(post_id = %id, ?outcome, "post image cleanup");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{
        MockDeleteQueue, MockObjectStore, MockPostRepository, StoreError,
    };
    use crate::domain::entities::Post;

    fn existing_post(author: UserId, image_url: Option<&str>) -> Post {
        Post::new(
            "Title".to_string(),
            "Body".to_string(),
            author,
            image_url.map(|u| u.to_string()),
        )
        .unwrap()
    }

    fn lifecycle(store: MockObjectStore, queue: MockDeleteQueue) -> Arc<ImageLifecycle> {
        Arc::new(ImageLifecycle::new(Arc::new(store), Arc::new(queue)))
    }

    #[tokio::test]
    async fn test_delete_post_direct_blob_delete() {
        let author = UserId::new();
        let post = existing_post(author, Some("https://s/b/abc_old.png"));
        let post_id = *post.id();

        let mut mock_posts = MockPostRepository::new();
        mock_posts
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(post.clone())));
        mock_posts.expect_delete().times(1).returning(|_| Ok(true));

        let mut mock_store = MockObjectStore::new();
        mock_store
            .expect_delete()
            .withf(|key| key == "abc_old.png")
            .times(1)
            .returning(|_| Ok(()));

        // Direct delete succeeded: zero enqueue calls
        let use_case = DeletePostUseCase::new(
            Arc::new(mock_posts),
            lifecycle(mock_store, MockDeleteQueue::new()),
        );

        assert!(use_case.execute(author, &post_id).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_post_falls_back_to_queue_exactly_once() {
        let author = UserId::new();
        let post = existing_post(author, Some("https://s/b/abc_old.png"));
        let post_id = *post.id();

        let mut mock_posts = MockPostRepository::new();
        mock_posts
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(post.clone())));
        mock_posts.expect_delete().times(1).returning(|_| Ok(true));

        let mut mock_store = MockObjectStore::new();
        mock_store
            .expect_delete()
            .times(1)
            .returning(|_| Err(StoreError::Request("network".to_string())));

        let mut mock_queue = MockDeleteQueue::new();
        mock_queue
            .expect_enqueue()
            .withf(|key| key == "abc_old.png")
            .times(1)
            .returning(|_| Ok(()));

        let use_case =
            DeletePostUseCase::new(Arc::new(mock_posts), lifecycle(mock_store, mock_queue));

        // The request still succeeds: cleanup failures are invisible
        assert!(use_case.execute(author, &post_id).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_post_without_image_touches_no_storage() {
        let author = UserId::new();
        let post = existing_post(author, None);
        let post_id = *post.id();

        let mut mock_posts = MockPostRepository::new();
        mock_posts
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(post.clone())));
        mock_posts.expect_delete().times(1).returning(|_| Ok(true));

        let use_case = DeletePostUseCase::new(
            Arc::new(mock_posts),
            lifecycle(MockObjectStore::new(), MockDeleteQueue::new()),
        );

        assert!(use_case.execute(author, &post_id).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_post_by_non_author_is_forbidden() {
        let post = existing_post(UserId::new(), Some("https://s/b/abc_old.png"));
        let post_id = *post.id();

        let mut mock_posts = MockPostRepository::new();
        mock_posts
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(post.clone())));

        // Row must not be deleted, blob must not be touched
        let use_case = DeletePostUseCase::new(
            Arc::new(mock_posts),
            lifecycle(MockObjectStore::new(), MockDeleteQueue::new()),
        );

        let result = use_case.execute(UserId::new(), &post_id).await;
        assert!(matches!(result, Err(DeletePostError::Forbidden)));
    }

    #[tokio::test]
    async fn test_delete_post_row_failure_skips_blob_cleanup() {
        let author = UserId::new();
        let post = existing_post(author, Some("https://s/b/abc_old.png"));
        let post_id = *post.id();

        let mut mock_posts = MockPostRepository::new();
        mock_posts
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(post.clone())));
        mock_posts
            .expect_delete()
            .times(1)
            .returning(|_| Err(RepositoryError::Internal("db down".to_string())));

        // Blob still referenced by the surviving row: no delete attempts
        let use_case = DeletePostUseCase::new(
            Arc::new(mock_posts),
            lifecycle(MockObjectStore::new(), MockDeleteQueue::new()),
        );

        let result = use_case.execute(author, &post_id).await;
        assert!(matches!(result, Err(DeletePostError::Repository(_))));
    }
}
