//! Post Handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::application::dto::request::{CreatePostRequest, ListPostsParams, UpdatePostRequest};
use crate::application::dto::response::{PostListResponse, PostResponse};
use crate::application::services::{PostError, PostService, PostServiceImpl};
use crate::domain::{NewPost, PostUpdate, SortOrder};
use crate::infrastructure::repositories::PgPostRepository;
use crate::infrastructure::storage::LocalFileStorage;
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;
use crate::startup::AppState;

/// Build a post service bound to this request's state.
pub(super) fn post_service(state: &AppState) -> PostServiceImpl<PgPostRepository> {
    let post_repo = Arc::new(PgPostRepository::new(state.db.clone()));
    let storage = Arc::new(LocalFileStorage::new(&state.settings.storage));
    PostServiceImpl::new(post_repo, storage)
}

/// Map service errors onto HTTP error responses.
pub(super) fn map_post_error(e: PostError) -> AppError {
    match e {
        PostError::NotFound => AppError::NotFound("Post not found".into()),
        PostError::Internal(msg) => AppError::Internal(msg),
    }
}

/// Create a new post
pub async fn create_post(
    State(state): State<AppState>,
    Json(body): Json<CreatePostRequest>,
) -> Result<Json<PostResponse>, AppError> {
    body.validate().map_err(validation_error)?;

    let post = post_service(&state)
        .create_post(NewPost {
            title: body.title,
            content: body.content,
            author: body.author,
            image_url: body.image_url,
        })
        .await
        .map_err(map_post_error)?;

    Ok(Json(PostResponse::from(post)))
}

/// List posts with offset pagination
pub async fn list_posts(
    State(state): State<AppState>,
    Query(params): Query<ListPostsParams>,
) -> Result<Json<PostListResponse>, AppError> {
    params.validate().map_err(validation_error)?;

    let limit = params.limit.unwrap_or(10);
    let offset = params.offset.unwrap_or(0);
    let order = params.order.unwrap_or(SortOrder::Desc);

    let listing = post_service(&state)
        .list_posts(limit, offset, order)
        .await
        .map_err(map_post_error)?;

    Ok(Json(PostListResponse::from(listing)))
}

/// Fetch a single post
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PostResponse>, AppError> {
    let post = post_service(&state)
        .get_post(id)
        .await
        .map_err(map_post_error)?;

    Ok(Json(PostResponse::from(post)))
}

/// Apply a partial update; only supplied fields change
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<UpdatePostRequest>,
) -> Result<Json<PostResponse>, AppError> {
    body.validate().map_err(validation_error)?;

    let post = post_service(&state)
        .update_post(
            id,
            PostUpdate {
                title: body.title,
                content: body.content,
                author: body.author,
                image_url: body.image_url,
            },
        )
        .await
        .map_err(map_post_error)?;

    Ok(Json(PostResponse::from(post)))
}

/// Delete a post
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    post_service(&state)
        .delete_post(id)
        .await
        .map_err(map_post_error)?;

    Ok(StatusCode::NO_CONTENT)
}
