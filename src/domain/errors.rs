use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Title must not be empty")]
    EmptyTitle,

    #[error("Content must not be empty")]
    EmptyContent,

    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    #[error("Invalid email: {0}")]
    InvalidEmail(String),
}
