//! Handlers for the `/projects` resource.
//!
//! Create and update take `multipart/form-data` with text fields `title`
//! and `description` and up to five files under `images`.

use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::models::project::{CreateProject, Project, UpdateProject};
use folio_core::validation;
use serde::Serialize;

use crate::error::{not_found, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;
use crate::upload::{self, UploadForm};

/// Multipart field carrying project images.
pub const IMAGES_FIELD: &str = "images";

/// Body returned by a successful update.
#[derive(Debug, Serialize)]
pub struct ProjectUpdated {
    pub message: String,
    pub project: Project,
}

/// GET /api/v1/projects
pub async fn list(State(state): State<AppState>) -> Json<Vec<Project>> {
    Json(state.projects.list().await)
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Project>> {
    let project = state
        .projects
        .find_by_id(&id)
        .await
        .ok_or_else(|| not_found("Project", id))?;
    Ok(Json(project))
}

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let mut form = UploadForm::read(multipart, IMAGES_FIELD).await?;
    validation::validate_project_images(form.files().len())?;

    let input = CreateProject {
        title: form.take_text("title").unwrap_or_default(),
        description: form.take_text("description").unwrap_or_default(),
    };

    let saved = form.save_files(&state.uploads).await?;
    match state.projects.create(&input, &saved).await {
        Ok(project) => Ok((StatusCode::CREATED, Json(project))),
        Err(e) => {
            upload::discard(&state.uploads, &saved).await;
            Err(e.into())
        }
    }
}

/// PUT /api/v1/projects/{id}
///
/// Partial update: absent or empty text fields are left alone, and images
/// are replaced only when new ones are uploaded.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<ProjectUpdated>> {
    let mut form = UploadForm::read(multipart, IMAGES_FIELD).await?;
    validation::validate_project_image_limit(form.files().len())?;

    let input = UpdateProject {
        title: form.take_text("title"),
        description: form.take_text("description"),
    };

    let saved = form.save_files(&state.uploads).await?;
    let result = state.projects.update(&id, &input, &saved).await;

    match result {
        Ok(Some(project)) => Ok(Json(ProjectUpdated {
            message: "Project updated successfully".into(),
            project,
        })),
        Ok(None) => {
            upload::discard(&state.uploads, &saved).await;
            Err(not_found("Project", id))
        }
        Err(e) => {
            upload::discard(&state.uploads, &saved).await;
            Err(e.into())
        }
    }
}

/// DELETE /api/v1/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    if state.projects.delete(&id).await? {
        Ok(Json(MessageResponse::new("Project deleted successfully")))
    } else {
        Err(not_found("Project", id))
    }
}
