//! User entity and repository trait.
//!
//! Maps to the `users` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Represents a registered account.
///
/// Maps to the `users` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - email: VARCHAR(255) NOT NULL UNIQUE
/// - password_hash: VARCHAR(255) NOT NULL
/// - username: VARCHAR(64) NULL
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Database-generated primary key
    pub id: i64,

    /// Email address (unique, the identity claim in issued tokens)
    pub email: String,

    /// Argon2 password hash
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Optional display username
    pub username: Option<String>,

    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Get the user's display name, falling back to email if no username is set.
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or(&self.email)
    }
}

/// Fields required to register a user. The id and timestamp are generated
/// by the database.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub username: Option<String>,
}

/// Repository trait for User data access operations.
///
/// Accounts are created by registration and only ever read afterwards;
/// there is no update or delete surface.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Check if an email address is already registered.
    async fn email_exists(&self, email: &str) -> Result<bool, AppError>;

    /// Create a new user in the database.
    async fn create(&self, user: &NewUser) -> Result<User, AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_user() -> User {
        User {
            id: 1,
            email: "test@example.com".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            username: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = create_test_user();

        let serialized = serde_json::to_string(&user).expect("Failed to serialize user");

        assert!(!serialized.contains("password_hash"));
        assert!(!serialized.contains("argon2id"));
    }

    #[test]
    fn test_display_name_prefers_username() {
        let mut user = create_test_user();
        user.username = Some("alice".to_string());

        assert_eq!(user.display_name(), "alice");
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user = create_test_user();
        assert!(user.username.is_none());

        assert_eq!(user.display_name(), "test@example.com");
    }
}
