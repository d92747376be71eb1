use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::application::ports::{PostRepository, RepositoryError};
use crate::domain::entities::Post;
use crate::domain::value_objects::{PostId, UserId};

pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn insert(&self, post: &Post) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO posts (id, title, content, author_id, image_url, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(post.id().as_uuid())
        .bind(post.title())
        .bind(post.content())
        .bind(post.author_id().as_uuid())
        .bind(post.image_url())
        .bind(post.created_at())
        .bind(post.updated_at())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, RepositoryError> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, title, content, author_id, image_url, created_at, updated_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PostRow::into_domain))
    }

    async fn update(&self, post: &Post) -> Result<(), RepositoryError> {
        // Last-writer-wins: no version column, concurrent edits overwrite
        sqlx::query(
            r#"
            UPDATE posts
            SET title = $2, content = $3, image_url = $4, updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(post.id().as_uuid())
        .bind(post.title())
        .bind(post.content())
        .bind(post.image_url())
        .bind(post.updated_at())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, id: &PostId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_newest(&self) -> Result<Vec<Post>, RepositoryError> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, title, content, author_id, image_url, created_at, updated_at
            FROM posts
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PostRow::into_domain).collect())
    }

    async fn list_by_author(&self, author_id: &UserId) -> Result<Vec<Post>, RepositoryError> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, title, content, author_id, image_url, created_at, updated_at
            FROM posts
            WHERE author_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(author_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PostRow::into_domain).collect())
    }
}

#[derive(sqlx::FromRow)]
struct PostRow {
    id: Uuid,
    title: String,
    content: String,
    author_id: Uuid,
    image_url: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PostRow {
    fn into_domain(self) -> Post {
        Post::reconstruct(
            PostId::from_uuid(self.id),
            self.title,
            self.content,
            UserId::from_uuid(self.author_id),
            self.image_url,
            self.created_at,
            self.updated_at,
        )
    }
}
