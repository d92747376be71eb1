use async_trait::async_trait;

use crate::application::ports::RepositoryError;
use crate::domain::entities::User;
use crate::domain::value_objects::UserId;
#[cfg(test)]
use mockall::{automock, predicate::*};

/// Port for user account persistence
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user; unique-violation on username/email maps to
    /// `RepositoryError::ConstraintViolation`
    async fn insert(&self, user: &User) -> Result<(), RepositoryError>;

    /// Find user by ID
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError>;

    /// Find user by username (login lookup)
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;

    /// Whether a username or email is already registered
    async fn username_or_email_taken(
        &self,
        username: &str,
        email: &str,
    ) -> Result<bool, RepositoryError>;
}
