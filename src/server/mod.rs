//! Functionality for serving the portfolio over HTTP.

pub mod api;
pub mod app;
pub mod errors;
pub mod render;
pub mod tracing;
