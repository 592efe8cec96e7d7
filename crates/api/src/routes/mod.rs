pub mod bookmark;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /bookmarks            GET list, POST create
/// /bookmarks/{id}       GET get_by_id, PUT update, DELETE delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/bookmarks", bookmark::router())
}
