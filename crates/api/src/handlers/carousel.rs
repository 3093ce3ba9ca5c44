//! Handlers for the `/carousel` resource.

use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::models::carousel::CarouselImage;
use folio_core::validation;

use crate::error::{not_found, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;
use crate::upload::{self, UploadForm};

/// Multipart field carrying the carousel image.
pub const IMAGE_FIELD: &str = "image";

/// GET /api/v1/carousel
pub async fn list(State(state): State<AppState>) -> Json<Vec<CarouselImage>> {
    Json(state.carousel.list().await)
}

/// GET /api/v1/carousel/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<CarouselImage>> {
    let image = state
        .carousel
        .find_by_id(&id)
        .await
        .ok_or_else(|| not_found("CarouselImage", id))?;
    Ok(Json(image))
}

/// POST /api/v1/carousel
///
/// Takes exactly one file under `image`.
pub async fn create(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<(StatusCode, Json<CarouselImage>)> {
    let form = UploadForm::read(multipart, IMAGE_FIELD).await?;
    validation::validate_carousel_images(form.files().len())?;

    let saved = form.save_files(&state.uploads).await?;
    match state.carousel.create(&saved).await {
        Ok(image) => Ok((StatusCode::CREATED, Json(image))),
        Err(e) => {
            upload::discard(&state.uploads, &saved).await;
            Err(e.into())
        }
    }
}

/// DELETE /api/v1/carousel/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    if state.carousel.delete(&id).await? {
        Ok(Json(MessageResponse::new("Carousel image deleted successfully")))
    } else {
        Err(not_found("CarouselImage", id))
    }
}
