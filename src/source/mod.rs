//! Client side of the external listing API.
//!
//! The source is read-only and fetched fresh on every sync call; its records
//! are never persisted as-is, only mapped into the project store.
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::Deserialize;

pub mod github;

/// One repository entry as reported by the external listing API.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceRecord {
    /// Repository name.
    pub name: String,
    /// Repository description. Absent upstream for many repositories.
    #[serde(default)]
    pub description: Option<String>,
    /// Link to the repository's public page.
    pub html_url: String,
    /// Creation time of the repository.
    pub created_at: DateTime<Utc>,
}

/// Failure modes of the external source.
#[derive(Debug, Display)]
pub enum SourceError {
    /// The network call errored or the endpoint returned a non-success status.
    #[display(fmt = "source unavailable: {}", _0)]
    Unavailable(String),
    /// The body could not be parsed into the expected list shape.
    #[display(fmt = "malformed response: {}", _0)]
    Malformed(String),
}

impl std::error::Error for SourceError {}

/// A listing endpoint that reports the account's repositories.
///
/// Object-safe so that the server state can hold any source and tests can
/// substitute a stub.
#[async_trait]
pub trait ProjectSource: Send + Sync {
    /// Fetch the first page of the account's repository list.
    async fn fetch_projects(&self) -> Result<Vec<SourceRecord>, SourceError>;
}
