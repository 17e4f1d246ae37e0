//! Repository trait for album data access.

use crate::domain::entities::Album;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the album catalog.
///
/// Every operation is a single round trip to the backing store. A missing
/// row is a normal outcome (`Ok(None)` / empty `Vec`); only failures of the
/// underlying connection or statement surface as errors.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteAlbumRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_album.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AlbumRepository: Send + Sync {
    /// Returns every album in the table, in store-natural order.
    ///
    /// An empty table yields an empty `Vec`, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_all(&self) -> Result<Vec<Album>, AppError>;

    /// Finds an album by its id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Album))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Album>, AppError>;

    /// Finds albums whose `artists` field contains the given substring,
    /// case-insensitively.
    ///
    /// The input is lower-cased and wrapped in wildcards before matching,
    /// so `"punk"` matches `"Daft Punk"`. Zero matches yield an empty `Vec`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_artists(&self, artists: &str) -> Result<Vec<Album>, AppError>;

    /// Inserts a new album and assigns its store-generated id.
    ///
    /// On success `album.id` is set to the new row's id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `album.id` is already present.
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, album: &mut Album) -> Result<(), AppError>;

    /// Overwrites all mutable fields of the row matching `album.id`.
    ///
    /// Updating an id that no longer exists affects zero rows and is not an
    /// error; callers needing the distinction must check existence first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `album.id` is absent.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, album: &Album) -> Result<(), AppError>;
}
