//! Catalog page route configuration.

use crate::state::AppState;
use crate::web::handlers::{add_album_handler, albums_page_handler};
use axum::{Router, routing::get};

/// Catalog page routes.
///
/// # Endpoints
///
/// - `GET  /albums` - Album listing with submission form (optional `?artiesten=` filter)
/// - `POST /albums` - Form submission for adding an album
pub fn routes() -> Router<AppState> {
    Router::new().route("/albums", get(albums_page_handler).post(add_album_handler))
}
