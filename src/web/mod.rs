//! Web layer for the browser-facing catalog pages.
//!
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering and form-submission handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
