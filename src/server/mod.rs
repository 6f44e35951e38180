//! Functionality for serving the catalogue over HTTP.

pub mod api;
pub mod app;
pub mod errors;
pub mod tracing;
