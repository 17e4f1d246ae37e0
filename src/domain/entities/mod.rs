//! Core domain entities representing the catalog data model.
//!
//! The catalog models a single concept: the [`Album`]. Entities are plain
//! data structures without business logic; persistence state is carried in
//! the optional `id` field rather than a separate "new" type, since every
//! other field is required at construction anyway.

pub mod album;

pub use album::Album;
