use std::sync::Arc;
use thiserror::Error;

use crate::application::dto::{RegisterRequest, UserDto};
use crate::application::ports::{RepositoryError, UserRepository};
use crate::application::security::{self, PasswordError};
use crate::domain::entities::User;
use crate::domain::errors::DomainError;

#[derive(Debug, Error)]
pub enum RegisterError {
    #[error("All fields are required")]
    MissingFields,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Username or email is already taken")]
    AlreadyTaken,

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),
}

/// Use case: Register a new user
pub struct RegisterUserUseCase {
    users: Arc<dyn UserRepository>,
}

impl RegisterUserUseCase {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Execute registration workflow
    pub async fn execute(&self, request: RegisterRequest) -> Result<UserDto, RegisterError> {
        // 1. Field presence and confirmation
        if request.username.trim().is_empty()
            || request.email.trim().is_empty()
            || request.password.is_empty()
        {
            return Err(RegisterError::MissingFields);
        }
        if request.password != request.password_confirm {
            return Err(RegisterError::PasswordMismatch);
        }

        // 2. Uniqueness check (the unique index is the real guard; this
        //    gives a friendly error for the common case)
        if self
            .users
            .username_or_email_taken(&request.username, &request.email)
            .await?
        {
            return Err(RegisterError::AlreadyTaken);
        }

        // 3. Hash and insert
        let password_hash = security::hash_password(&request.password)?;
        let user = User::new(request.username, request.email, password_hash)?;

        match self.users.insert(&user).await {
            Ok(()) => Ok(UserDto::from(user)),
            // Lost the race against a concurrent registration
            Err(RepositoryError::ConstraintViolation(_)) => Err(RegisterError::AlreadyTaken),
            Err(e) => Err(e.into()),
        }
    }
}
