//! Authentication Handlers

use std::sync::Arc;

use axum::{extract::State, Extension, Json};
use validator::Validate;

use crate::application::dto::request::{LoginRequest, RegisterRequest};
use crate::application::dto::response::{ProtectedResponse, RegisterResponse, TokenResponse};
use crate::application::services::{AuthError, AuthService, AuthServiceImpl};
use crate::infrastructure::repositories::PgUserRepository;
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;
use crate::startup::AppState;

fn auth_service(state: &AppState) -> AuthServiceImpl<PgUserRepository> {
    let user_repo = Arc::new(PgUserRepository::new(state.db.clone()));
    AuthServiceImpl::new(user_repo, state.settings.jwt.clone())
}

/// Register a new user
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, AppError> {
    body.validate().map_err(validation_error)?;

    auth_service(&state)
        .register(&body.email, &body.password, body.username.as_deref())
        .await
        .map_err(|e| match e {
            AuthError::EmailExists => AppError::BadRequest("Email already registered".into()),
            e => AppError::Internal(e.to_string()),
        })?;

    Ok(Json(RegisterResponse {
        message: "User registered successfully".to_string(),
    }))
}

/// Login with credentials and receive a bearer token
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    body.validate().map_err(validation_error)?;

    let tokens = auth_service(&state)
        .login(&body.email, &body.password)
        .await
        .map_err(|e| match e {
            AuthError::InvalidCredentials => {
                AppError::Unauthorized("Invalid email or password".into())
            }
            e => AppError::Internal(e.to_string()),
        })?;

    Ok(Json(TokenResponse::from(tokens)))
}

/// Auth-gated example route.
///
/// The middleware has already verified the token; what remains is
/// resolving the email claim to a stored account, which fails closed if
/// the account vanished after the token was issued.
pub async fn protected(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<ProtectedResponse>, AppError> {
    let user = auth_service(&state)
        .current_user(&auth.email)
        .await
        .map_err(|e| match e {
            AuthError::UserNotFound => AppError::Unauthorized("User not found".into()),
            e => AppError::Internal(e.to_string()),
        })?;

    Ok(Json(ProtectedResponse {
        message: format!("Hello, {}", user.display_name()),
    }))
}
