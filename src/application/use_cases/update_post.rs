use std::sync::Arc;
use thiserror::Error;

use crate::application::dto::PostDto;
use crate::application::image_lifecycle::{ImageError, ImageLifecycle, ImageUpload};
use crate::application::ports::{PostRepository, RepositoryError};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{PostId, UserId};

#[derive(Debug, Error)]
pub enum UpdatePostError {
    #[error("Post not found: {0}")]
    NotFound(String),

    #[error("Only the author can edit this post")]
    Forbidden,

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Image error: {0}")]
    Image(#[from] ImageError),
}

/// Use case: Edit a post, optionally replacing its image.
///
/// Replacement ordering: the new blob is uploaded and the row updated
/// before the old blob is scheduled for deletion, so there is never a
/// window where the post references nothing.
pub struct UpdatePostUseCase {
    posts: Arc<dyn PostRepository>,
    images: Arc<ImageLifecycle>,
}

impl UpdatePostUseCase {
    pub fn new(posts: Arc<dyn PostRepository>, images: Arc<ImageLifecycle>) -> Self {
        Self { posts, images }
    }

    /// Execute edit workflow
    pub async fn execute(
        &self,
        author: UserId,
        id: &PostId,
        title: String,
        content: String,
        image: Option<ImageUpload>,
    ) -> Result<PostDto, UpdatePostError> {
        // 1. Load and authorize
        let mut post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| UpdatePostError::NotFound(id.to_string()))?;

        if !post.is_authored_by(&author) {
            return Err(UpdatePostError::Forbidden);
        }

        // 2. Apply the text edit (validates; nothing persisted yet)
        post.edit(title, content)?;

        // 3. New image: attach first, swap the reference, remember the old one.
        //    An attach failure aborts here with post and old blob untouched.
        let mut replaced_url = None;
        if let Some(upload) = image {
            let stored = self.images.attach(upload).await?;
            replaced_url = post.replace_image(stored.url);
        }

        // 4. Persist the row
        self.posts.update(&post).await?;

        // 5. Only now is the old blob unreferenced; hand it to the queue
        if let Some(old_url) = replaced_url {
            let outcome = self.images.schedule_delete(&old_url).await;
            tracing::info!(post_id = %post.id(), ?outcome, "replaced image scheduled for delete");
        }

        Ok(PostDto::from(post))
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
            "Old title".to_string(),
            "Old body".to_string(),
            author,
            image_url.map(|u| u.to_string()),
        )
        .unwrap()
    }

    fn upload() -> ImageUpload {
        ImageUpload {
            filename: "new.png".to_string(),
            content_type: "image/png".to_string(),
            bytes: vec![1],
        }
    }

    fn lifecycle(store: MockObjectStore, queue: MockDeleteQueue) -> Arc<ImageLifecycle> {
        Arc::new(ImageLifecycle::new(Arc::new(store), Arc::new(queue)))
    }

    #[tokio::test]
    async fn test_update_text_only_keeps_image_untouched() {
        let author = UserId::new();
        let post = existing_post(author, Some("https://s/b/abc_old.png"));
        let post_id = *post.id();

        let mut mock_posts = MockPostRepository::new();
        mock_posts
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(post.clone())));
        mock_posts
            .expect_update()
            .withf(|p| p.image_url() == Some("https://s/b/abc_old.png"))
            .times(1)
            .returning(|_| Ok(()));

        // No store or queue traffic expected
        let use_case = UpdatePostUseCase::new(
            Arc::new(mock_posts),
            lifecycle(MockObjectStore::new(), MockDeleteQueue::new()),
        );

        let result = use_case
            .execute(author, &post_id, "New".to_string(), "Body".to_string(), None)
            .await;

        assert_eq!(result.unwrap().title, "New");
    }

    #[tokio::test]
    async fn test_update_replaces_image_and_schedules_old_delete_once() {
        let author = UserId::new();
        let post = existing_post(author, Some("https://s/b/abc_old.png"));
        let post_id = *post.id();

        let mut mock_store = MockObjectStore::new();
        mock_store
            .expect_put()
            .times(1)
            .returning(|key, _, _| Ok(format!("https://s/b/{key}")));

        let mut mock_queue = MockDeleteQueue::new();
        mock_queue
            .expect_enqueue()
            .withf(|key| key == "abc_old.png")
            .times(1)
            .returning(|_| Ok(()));

        let mut mock_posts = MockPostRepository::new();
        mock_posts
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(post.clone())));
        mock_posts
            .expect_update()
            .withf(|p| p.image_url().is_some_and(|u| u.ends_with("_new.png")))
            .times(1)
            .returning(|_| Ok(()));

        let use_case =
            UpdatePostUseCase::new(Arc::new(mock_posts), lifecycle(mock_store, mock_queue));

        let result = use_case
            .execute(
                author,
                &post_id,
                "New".to_string(),
                "Body".to_string(),
                Some(upload()),
            )
            .await;

        let dto = result.unwrap();
        assert!(dto.image_url.unwrap().ends_with("_new.png"));
    }

    #[tokio::test]
    async fn test_update_upload_failure_leaves_post_unchanged() {
        let author = UserId::new();
        let post = existing_post(author, Some("https://s/b/abc_old.png"));
        let post_id = *post.id();

        let mut mock_store = MockObjectStore::new();
        mock_store
            .expect_put()
            .times(1)
            .returning(|_, _, _| Err(StoreError::Request("rejected".to_string())));

        // No update and no enqueue: existing image_url stays untouched
        let mut mock_posts = MockPostRepository::new();
        mock_posts
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(post.clone())));

        let use_case = UpdatePostUseCase::new(
            Arc::new(mock_posts),
            lifecycle(mock_store, MockDeleteQueue::new()),
        );

        let result = use_case
            .execute(
                author,
                &post_id,
                "New".to_string(),
                "Body".to_string(),
                Some(upload()),
            )
            .await;

        assert!(matches!(result, Err(UpdatePostError::Image(_))));
    }

    #[tokio::test]
    async fn test_update_by_non_author_is_forbidden() {
        let post = existing_post(UserId::new(), None);
        let post_id = *post.id();

        let mut mock_posts = MockPostRepository::new();
        mock_posts
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(post.clone())));

        let use_case = UpdatePostUseCase::new(
            Arc::new(mock_posts),
            lifecycle(MockObjectStore::new(), MockDeleteQueue::new()),
        );

        let result = use_case
            .execute(
                UserId::new(),
                &post_id,
                "New".to_string(),
                "Body".to_string(),
                None,
            )
            .await;

        assert!(matches!(result, Err(UpdatePostError::Forbidden)));
    }

    #[tokio::test]
    async fn test_update_missing_post() {
        let mut mock_posts = MockPostRepository::new();
        mock_posts
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let use_case = UpdatePostUseCase::new(
            Arc::new(mock_posts),
            lifecycle(MockObjectStore::new(), MockDeleteQueue::new()),
        );

        let result = use_case
            .execute(
                UserId::new(),
                &PostId::new(),
                "T".to_string(),
                "C".to_string(),
                None,
            )
            .await;

        assert!(matches!(result, Err(UpdatePostError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_first_image_schedules_no_delete() {
        let author = UserId::new();
        let post = existing_post(author, None);
        let post_id = *post.id();

        let mut mock_store = MockObjectStore::new();
        mock_store
            .expect_put()
            .times(1)
            .returning(|key, _, _| Ok(format!("https://s/b/{key}")));

        // No prior image, so the queue must stay silent
        let mut mock_posts = MockPostRepository::new();
        mock_posts
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(post.clone())));
        mock_posts.expect_update().times(1).returning(|_| Ok(()));

        let use_case = UpdatePostUseCase::new(
            Arc::new(mock_posts),
            lifecycle(mock_store, MockDeleteQueue::new()),
        );

        let result = use_case
            .execute(
                author,
                &post_id,
                "New".to_string(),
                "Body".to_string(),
                Some(upload()),
            )
            .await;

        assert!(result.unwrap().image_url.is_some());
    }
}
