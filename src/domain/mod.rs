//! Domain layer containing the catalog's entities and data-access contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by the infrastructure layer

pub mod entities;
pub mod repositories;
