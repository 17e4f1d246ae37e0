//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for testing.

pub mod album_repository;

pub use album_repository::AlbumRepository;

#[cfg(test)]
pub use album_repository::MockAlbumRepository;
