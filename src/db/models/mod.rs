//! This module contains all the sqlx structs for the database tables.

/// sqlx structs for project table.
pub mod project;
