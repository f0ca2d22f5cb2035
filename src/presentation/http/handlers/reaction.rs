//! Reaction Handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::application::dto::request::ReactionRequest;
use crate::application::dto::response::{ReactionAddedResponse, ReactionRemovedResponse};
use crate::application::services::{ReactionError, ReactionService, ReactionServiceImpl};
use crate::infrastructure::repositories::PgReactionRepository;
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;
use crate::startup::AppState;

fn reaction_service(state: &AppState) -> ReactionServiceImpl<PgReactionRepository> {
    let reaction_repo = Arc::new(PgReactionRepository::new(state.db.clone()));
    ReactionServiceImpl::new(reaction_repo)
}

fn map_reaction_error(e: ReactionError) -> AppError {
    match e {
        ReactionError::PostNotFound => AppError::NotFound("Post not found".into()),
        ReactionError::ReactionNotFound => AppError::NotFound("Reaction not found".into()),
        ReactionError::Internal(msg) => AppError::Internal(msg),
    }
}

/// Add one reaction of the given type to a post
pub async fn add_reaction(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
    Json(body): Json<ReactionRequest>,
) -> Result<Json<ReactionAddedResponse>, AppError> {
    body.validate().map_err(validation_error)?;

    let reaction = reaction_service(&state)
        .react(post_id, &body.reaction_type)
        .await
        .map_err(map_reaction_error)?;

    Ok(Json(ReactionAddedResponse::from(reaction)))
}

/// Remove one reaction of the given type from a post
pub async fn remove_reaction(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
    Json(body): Json<ReactionRequest>,
) -> Result<Json<ReactionRemovedResponse>, AppError> {
    body.validate().map_err(validation_error)?;

    let reaction = reaction_service(&state)
        .unreact(post_id, &body.reaction_type)
        .await
        .map_err(map_reaction_error)?;

    Ok(Json(ReactionRemovedResponse::from(reaction)))
}
