//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::domain::repositories::AlbumRepository;

/// State shared across all request handlers.
///
/// The repository sits behind a trait object so handler tests can swap in
/// a mock without a database.
#[derive(Clone)]
pub struct AppState {
    pub albums: Arc<dyn AlbumRepository>,
}

impl AppState {
    pub fn new(albums: Arc<dyn AlbumRepository>) -> Self {
        Self { albums }
    }
}
