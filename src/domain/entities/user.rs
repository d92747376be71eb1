use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{errors::DomainError, value_objects::UserId};

/// Registered account. The password is stored only as an argon2id PHC hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    username: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl User {
    pub fn new(username: String, email: String, password_hash: String) -> Result<Self, DomainError> {
        if username.trim().is_empty() {
            return Err(DomainError::InvalidUsername(username));
        }
        if email.trim().is_empty() || !email.contains('@') {
            return Err(DomainError::InvalidEmail(email));
        }

        Ok(Self {
            id: UserId::new(),
            username,
            email,
            password_hash,
            created_at: Utc::now(),
        })
    }

    /// Reconstruct from storage (e.g., database)
    pub fn reconstruct(
        id: UserId,
        username: String,
        email: String,
        password_hash: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username,
            email,
            password_hash,
            created_at,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_rejects_blank_username() {
        let result = User::new(" ".to_string(), "a@b.c".to_string(), "hash".to_string());
        assert!(matches!(result, Err(DomainError::InvalidUsername(_))));
    }

    #[test]
    fn test_new_user_rejects_email_without_at() {
        let result = User::new("alice".to_string(), "nope".to_string(), "hash".to_string());
        assert!(matches!(result, Err(DomainError::InvalidEmail(_))));
    }

    #[test]
    fn test_new_user_assigns_id() {
        let user = User::new("alice".to_string(), "a@b.c".to_string(), "hash".to_string()).unwrap();
        assert_eq!(user.username(), "alice");
        assert!(!user.id().to_string().is_empty());
    }
}
