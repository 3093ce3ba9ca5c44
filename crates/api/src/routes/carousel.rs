//! Route definitions for the `/carousel` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::carousel;
use crate::state::AppState;

/// Routes mounted at `/carousel`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create      (multipart, exactly 1 image)
/// GET    /{id}    -> get_by_id
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(carousel::list).post(carousel::create))
        .route("/{id}", get(carousel::get_by_id).delete(carousel::delete))
}
