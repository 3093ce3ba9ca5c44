use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Records currently held by each collection.
    pub collections: CollectionCounts,
}

#[derive(Serialize)]
pub struct CollectionCounts {
    pub projects: usize,
    pub carousel: usize,
    pub videos: usize,
}

impl CollectionCounts {
    /// Count every collection in `state`, taking each lock in turn.
    pub async fn of(state: &AppState) -> Self {
        Self {
            projects: state.projects.list().await.len(),
            carousel: state.carousel.list().await.len(),
            videos: state.videos.list().await.len(),
        }
    }
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        collections: CollectionCounts::of(&state).await,
    })
}

/// Mounted at the root, outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
