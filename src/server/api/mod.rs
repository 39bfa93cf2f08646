//! This module contains the API endpoints for the server.
pub mod pages;
pub mod projects;
pub mod routes;
pub mod state;
