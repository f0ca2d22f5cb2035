//! Authentication Service
//!
//! Handles registration, login, Argon2 password hashing, and JWT bearer
//! tokens. Tokens are the only session mechanism: there is no server-side
//! session store, and invalidation happens purely through expiry.

use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::JwtSettings;
use crate::domain::{NewUser, User, UserRepository};

/// Authentication service trait for dependency injection
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user
    async fn register(
        &self,
        email: &str,
        password: &str,
        username: Option<&str>,
    ) -> Result<User, AuthError>;

    /// Authenticate with credentials and issue a bearer token
    async fn login(&self, email: &str, password: &str) -> Result<AuthTokens, AuthError>;

    /// Resolve the account behind an authenticated email claim
    async fn current_user(&self, email: &str) -> Result<User, AuthError>;
}

/// Authentication tokens response
#[derive(Debug, Clone, Serialize)]
pub struct AuthTokens {
    pub access_token: String,
    pub token_type: String,
}

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (the user's email)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
}

/// Authentication errors
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("User not found")]
    UserNotFound,

    #[error("Email already registered")]
    EmailExists,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Hash a password using Argon2id with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Internal(format!("Password hashing failed: {}", e)))
}

/// Verify a password against its hash.
///
/// The argon2 verifier recomputes the hash under the stored parameters, so
/// mismatches are not distinguishable by timing.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AuthError::Internal(format!("Invalid password hash: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Create a signed, expiring bearer token with the email as subject.
pub fn create_token(email: &str, settings: &JwtSettings) -> Result<String, AuthError> {
    let now = Utc::now();
    let expiry = now + Duration::minutes(settings.access_token_expiry_minutes);

    let claims = Claims {
        sub: email.to_string(),
        exp: expiry.timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(settings.secret.as_bytes()),
    )
    .map_err(|e| AuthError::Internal(format!("Token generation failed: {}", e)))
}

/// Decode and validate a bearer token.
///
/// Tampered, expired, or malformed input comes back as an `AuthError`
/// variant; nothing escapes as a panic or a foreign error type.
pub fn decode_token(token: &str, settings: &JwtSettings) -> Result<Claims, AuthError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(settings.secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        _ => AuthError::InvalidToken,
    })?;

    Ok(token_data.claims)
}

/// AuthService implementation
pub struct AuthServiceImpl<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    jwt_settings: JwtSettings,
}

impl<U> AuthServiceImpl<U>
where
    U: UserRepository,
{
    /// Create a new AuthServiceImpl
    pub fn new(user_repo: Arc<U>, jwt_settings: JwtSettings) -> Self {
        Self {
            user_repo,
            jwt_settings,
        }
    }
}

#[async_trait]
impl<U> AuthService for AuthServiceImpl<U>
where
    U: UserRepository + 'static,
{
    async fn register(
        &self,
        email: &str,
        password: &str,
        username: Option<&str>,
    ) -> Result<User, AuthError> {
        // Check if email already exists
        if self
            .user_repo
            .email_exists(email)
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))?
        {
            return Err(AuthError::EmailExists);
        }

        let password_hash = hash_password(password)?;

        let new_user = NewUser {
            email: email.to_string(),
            password_hash,
            username: username.map(str::to_string),
        };

        // The unique constraint still guards the race between the existence
        // check and the insert.
        self.user_repo.create(&new_user).await.map_err(|e| match e {
            crate::shared::error::AppError::BadRequest(_) => AuthError::EmailExists,
            e => AuthError::Internal(e.to_string()),
        })
    }

    async fn login(&self, email: &str, password: &str) -> Result<AuthTokens, AuthError> {
        // Find user by email
        let user = self
            .user_repo
            .find_by_email(email)
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))?
            .ok_or(AuthError::InvalidCredentials)?;

        // Verify password
        if !verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        let access_token = create_token(&user.email, &self.jwt_settings)?;

        Ok(AuthTokens {
            access_token,
            token_type: "bearer".to_string(),
        })
    }

    async fn current_user(&self, email: &str) -> Result<User, AuthError> {
        self.user_repo
            .find_by_email(email)
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))?
            .ok_or(AuthError::UserNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_jwt_settings() -> JwtSettings {
        JwtSettings {
            secret: "test-secret-key-that-is-long-enough!".to_string(),
            access_token_expiry_minutes: 30,
        }
    }

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hash = hash_password("hunter2hunter2").unwrap();

        assert!(verify_password("hunter2hunter2", &hash).unwrap());
        assert!(!verify_password("wrong-password", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash_password("same-password").unwrap();
        let second = hash_password("same-password").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_verify_rejects_garbage_hash() {
        assert!(verify_password("anything", "not-a-phc-string").is_err());
    }

    #[test]
    fn test_token_roundtrip_preserves_subject() {
        let settings = test_jwt_settings();
        let token = create_token("alice@example.com", &settings).unwrap();

        let claims = decode_token(&token, &settings).unwrap();
        assert_eq!(claims.sub, "alice@example.com");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let settings = JwtSettings {
            access_token_expiry_minutes: -5,
            ..test_jwt_settings()
        };
        let token = create_token("alice@example.com", &settings).unwrap();

        match decode_token(&token, &settings) {
            Err(AuthError::TokenExpired) => {}
            other => panic!("expected TokenExpired, got {:?}", other),
        }
    }

    #[test]
    fn test_token_signed_with_other_secret_is_invalid() {
        let settings = test_jwt_settings();
        let other = JwtSettings {
            secret: "a-completely-different-signing-key!!".to_string(),
            ..test_jwt_settings()
        };
        let token = create_token("alice@example.com", &other).unwrap();

        match decode_token(&token, &settings) {
            Err(AuthError::InvalidToken) => {}
            other => panic!("expected InvalidToken, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_token_is_invalid() {
        let settings = test_jwt_settings();

        match decode_token("not.a.jwt", &settings) {
            Err(AuthError::InvalidToken) => {}
            other => panic!("expected InvalidToken, got {:?}", other),
        }
    }

    #[test]
    fn test_tampered_token_is_invalid() {
        let settings = test_jwt_settings();
        let token = create_token("alice@example.com", &settings).unwrap();

        // Flip a character in the payload segment
        let mut parts: Vec<String> = token.split('.').map(str::to_string).collect();
        parts[1] = format!("x{}", &parts[1][1..]);
        let tampered = parts.join(".");

        assert!(matches!(
            decode_token(&tampered, &settings),
            Err(AuthError::InvalidToken)
        ));
    }
}
