use serde::{Deserialize, Serialize};

use crate::domain::entities::{Post, User};

/// DTO for post responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDto {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author_id: String,
    pub image_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id().to_string(),
            title: post.title().to_string(),
            content: post.content().to_string(),
            author_id: post.author_id().to_string(),
            image_url: post.image_url().map(|u| u.to_string()),
            created_at: post.created_at().to_rfc3339(),
            updated_at: post.updated_at().to_rfc3339(),
        }
    }
}

/// DTO for user responses (never carries the password hash)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id().to_string(),
            username: user.username().to_string(),
            email: user.email().to_string(),
            created_at: user.created_at().to_rfc3339(),
        }
    }
}

/// DTO for registration requests
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

/// DTO for login requests
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// DTO for login responses
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserDto,
}
