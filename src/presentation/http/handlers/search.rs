//! Search Handler

use axum::{
    extract::{Query, State},
    Json,
};
use validator::Validate;

use crate::application::dto::request::SearchParams;
use crate::application::dto::response::SearchResponse;
use crate::application::services::PostService;
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;
use crate::startup::AppState;

use super::post::{map_post_error, post_service};

/// Case-insensitive substring search over title, content, and author
pub async fn search_posts(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, AppError> {
    params.validate().map_err(validation_error)?;

    let limit = params.limit.unwrap_or(10);
    let offset = params.offset.unwrap_or(0);

    let page = post_service(&state)
        .search_posts(&params.query, limit, offset)
        .await
        .map_err(map_post_error)?;

    Ok(Json(SearchResponse::from(page)))
}
