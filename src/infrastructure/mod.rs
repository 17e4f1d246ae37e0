//! Infrastructure layer for external integrations.
//!
//! Implements the interfaces defined by the domain layer. The only external
//! system here is the relational store.
//!
//! # Modules
//!
//! - [`persistence`] - SQLite repository implementations

pub mod persistence;
