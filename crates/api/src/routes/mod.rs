pub mod carousel;
pub mod health;
pub mod project;
pub mod video;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                  list, create
/// /projects/{id}             get, update, delete
///
/// /carousel                  list, create
/// /carousel/{id}             get, delete
///
/// /videos                    list, create
/// /videos/{id}               get, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/carousel", carousel::router())
        .nest("/videos", video::router())
}
