use std::sync::Arc;
use thiserror::Error;

use crate::application::ports::{RepositoryError, UserRepository};
use crate::application::security;
use crate::domain::entities::User;

#[derive(Debug, Error)]
pub enum LoginError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Use case: Authenticate a user by username and password.
///
/// Returns the domain user; the API layer mints the token.
pub struct LoginUserUseCase {
    users: Arc<dyn UserRepository>,
}

impl LoginUserUseCase {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn execute(&self, username: &str, password: &str) -> Result<User, LoginError> {
        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or(LoginError::InvalidCredentials)?;

        security::verify_password(password, user.password_hash())
            .map_err(|_| LoginError::InvalidCredentials)?;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockUserRepository;

    fn stored_user(password: &str) -> User {
        User::new(
            "alice".to_string(),
            "alice@example.com".to_string(),
            security::hash_password(password).unwrap(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_login_happy_path() {
        let user = stored_user("s3cret-pass");
        let mut mock_users = MockUserRepository::new();
        mock_users
            .expect_find_by_username()
            .withf(|u| u == "alice")
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let use_case = LoginUserUseCase::new(Arc::new(mock_users));
        let result = use_case.execute("alice", "s3cret-pass").await;

        assert_eq!(result.unwrap().username(), "alice");
    }

    #[tokio::test]
    async fn test_login_unknown_user() {
        let mut mock_users = MockUserRepository::new();
        mock_users
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));

        let use_case = LoginUserUseCase::new(Arc::new(mock_users));
        let result = use_case.execute("ghost", "whatever").await;

        assert!(matches!(result, Err(LoginError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let user = stored_user("s3cret-pass");
        let mut mock_users = MockUserRepository::new();
        mock_users
            .expect_find_by_username()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let use_case = LoginUserUseCase::new(Arc::new(mock_users));
        let result = use_case.execute("alice", "wrong").await;

        assert!(matches!(result, Err(LoginError::InvalidCredentials)));
    }
}
