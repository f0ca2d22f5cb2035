//! Upload Handler

use axum::{
    extract::{Multipart, Query, State},
    Json,
};

use crate::application::dto::request::UploadParams;
use crate::application::dto::response::{UploadResponse, UploadUrls};
use crate::application::services::PostService;
use crate::shared::error::AppError;
use crate::startup::AppState;

use super::post::{map_post_error, post_service};

/// Attach an uploaded image to a post.
///
/// Expects a multipart form with an `image` file field. The file is stored
/// under a generated name, the post's image_url is updated, and the public
/// URL is returned.
pub async fn upload_image(
    State(state): State<AppState>,
    Query(params): Query<UploadParams>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut image: Option<(String, axum::body::Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {}", e)))?
    {
        if field.name() == Some("image") {
            let filename = field.file_name().unwrap_or("upload").to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {}", e)))?;
            image = Some((filename, bytes));
            break;
        }
    }

    let (filename, bytes) =
        image.ok_or_else(|| AppError::BadRequest("Missing image field".into()))?;

    let post = post_service(&state)
        .attach_image(params.post_id, &filename, &bytes)
        .await
        .map_err(map_post_error)?;

    let image_url = post
        .image_url
        .ok_or_else(|| AppError::Internal("Image URL missing after upload".into()))?;

    Ok(Json(UploadResponse {
        message: "File(s) uploaded successfully".to_string(),
        urls: UploadUrls { image_url },
    }))
}
