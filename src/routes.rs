//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`          - Redirect to the album listing
//! - `/albums`         - Listing page and form submission
//! - `/public/*`       - Static assets (stylesheet)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging

use crate::state::AppState;
use crate::web;
use axum::response::Redirect;
use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/albums") }))
        .merge(web::routes::routes())
        .nest_service("/public", ServeDir::new("public"))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
