//! # Album Catalog
//!
//! A small catalog-management service: a music album data model backed by a
//! relational table, plus a server-rendered page that lists all albums and
//! offers a form to add one. Built with Axum and SQLite.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The [`domain::entities::Album`] entity
//!   and the [`domain::repositories::AlbumRepository`] trait
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite repository
//!   implementation
//! - **Web Layer** ([`web`]) - Server-rendered listing and submission page
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional; defaults to sqlite://albums.db?mode=rwc
//! export DATABASE_URL="sqlite://albums.db?mode=rwc"
//!
//! # Start the service (migrations run at startup)
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod routes;
pub mod server;
pub mod state;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::domain::entities::Album;
    pub use crate::domain::repositories::AlbumRepository;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
