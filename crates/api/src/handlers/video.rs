//! Handlers for the `/videos` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::models::video::{CreateVideo, Video};

use crate::error::{not_found, AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/v1/videos
pub async fn list(State(state): State<AppState>) -> Json<Vec<Video>> {
    Json(state.videos.list().await)
}

/// GET /api/v1/videos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Video>> {
    let video = state
        .videos
        .find_by_id(&id)
        .await
        .ok_or_else(|| not_found("Video", id))?;
    Ok(Json(video))
}

/// POST /api/v1/videos
///
/// JSON body `{ "url": ..., "title": ... }`. A body that is not valid JSON
/// is reported in the same `{ "error" }` shape as validation failures.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateVideo>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Video>)> {
    let Json(input) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let video = state.videos.create(&input).await?;
    Ok((StatusCode::CREATED, Json(video)))
}

/// DELETE /api/v1/videos/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    if state.videos.delete(&id).await? {
        Ok(Json(MessageResponse::new("Video deleted successfully")))
    } else {
        Err(not_found("Video", id))
    }
}
