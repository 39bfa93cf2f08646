//! Utility functions and the CLI entrypoint.

pub mod cli;
