use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    errors::DomainError,
    value_objects::{PostId, UserId},
};

/// Post aggregate root - a news entry with an optional image attachment.
///
/// `image_url` is a reference into the object store, not ownership: the blob
/// itself is created by an upload and destroyed either by a direct delete or
/// by the queue-driven worker. At most one image is attached at any time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    id: PostId,
    title: String,
    content: String,
    author_id: UserId,
    image_url: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post; title and content must be non-empty
    pub fn new(
        title: String,
        content: String,
        author_id: UserId,
        image_url: Option<String>,
    ) -> Result<Self, DomainError> {
        validate_text(&title, &content)?;

        let now = Utc::now();
        Ok(Self {
            id: PostId::new(),
            title,
            content,
            author_id,
            image_url,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstruct from storage (e.g., database)
    pub fn reconstruct(
        id: PostId,
        title: String,
        content: String,
        author_id: UserId,
        image_url: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            content,
            author_id,
            image_url,
            created_at,
            updated_at,
        }
    }

    /// Apply an edit to title and content
    pub fn edit(&mut self, title: String, content: String) -> Result<(), DomainError> {
        validate_text(&title, &content)?;

        self.title = title;
        self.content = content;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Swap in a new image reference, returning the previous one.
    ///
    /// Callers must only invoke this after the new blob is durably stored,
    /// and must hand the returned reference to the lifecycle policy for
    /// cleanup once the post row is persisted.
    pub fn replace_image(&mut self, image_url: String) -> Option<String> {
        let old = self.image_url.take();
        self.image_url = Some(image_url);
        self.updated_at = Utc::now();
        old
    }

    pub fn is_authored_by(&self, user_id: &UserId) -> bool {
        &self.author_id == user_id
    }

    pub fn id(&self) -> &PostId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn author_id(&self) -> &UserId {
        &self.author_id
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

fn validate_text(title: &str, content: &str) -> Result<(), DomainError> {
    if title.trim().is_empty() {
        return Err(DomainError::EmptyTitle);
    }
    if content.trim().is_empty() {
        return Err(DomainError::EmptyContent);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post(image_url: Option<String>) -> Post {
        Post::new(
            "Title".to_string(),
            "Body".to_string(),
            UserId::new(),
            image_url,
        )
        .unwrap()
    }

    #[test]
    fn test_new_post_rejects_empty_title() {
        let result = Post::new("  ".to_string(), "Body".to_string(), UserId::new(), None);
        assert!(matches!(result, Err(DomainError::EmptyTitle)));
    }

    #[test]
    fn test_new_post_rejects_empty_content() {
        let result = Post::new("Title".to_string(), "".to_string(), UserId::new(), None);
        assert!(matches!(result, Err(DomainError::EmptyContent)));
    }

    #[test]
    fn test_replace_image_returns_previous_reference() {
        let mut post = sample_post(Some("https://s/b/abc_old.png".to_string()));

        let old = post.replace_image("https://s/b/xyz_new.png".to_string());

        assert_eq!(old.as_deref(), Some("https://s/b/abc_old.png"));
        assert_eq!(post.image_url(), Some("https://s/b/xyz_new.png"));
    }

    #[test]
    fn test_replace_image_on_post_without_image() {
        let mut post = sample_post(None);

        let old = post.replace_image("https://s/b/xyz_new.png".to_string());

        assert!(old.is_none());
        assert_eq!(post.image_url(), Some("https://s/b/xyz_new.png"));
    }

    #[test]
    fn test_edit_rejects_empty_fields_without_mutation() {
        let mut post = sample_post(None);

        assert!(post.edit("".to_string(), "new body".to_string()).is_err());
        assert_eq!(post.title(), "Title");
        assert_eq!(post.content(), "Body");
    }

    #[test]
    fn test_authorship_check() {
        let author = UserId::new();
        let post = Post::new("T".to_string(), "C".to_string(), author, None).unwrap();

        assert!(post.is_authored_by(&author));
        assert!(!post.is_authored_by(&UserId::new()));
    }
}
