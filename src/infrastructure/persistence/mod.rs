//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! bound parameters.
//!
//! # Repositories
//!
//! - [`SqliteAlbumRepository`] - Album storage and retrieval

pub mod sqlite_album_repository;

pub use sqlite_album_repository::SqliteAlbumRepository;
