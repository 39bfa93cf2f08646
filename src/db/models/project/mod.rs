use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::{any::AnyRow, FromRow, Row as _};

use crate::source::SourceRecord;

pub mod manager;

/// Trait for managing projects.
#[async_trait]
pub trait Manager {
    /// Find a project by its name.
    async fn find_by_name(&self, name: &str) -> anyhow::Result<Option<Project>>;
    /// Insert a new project.
    async fn create(&self, project: &Project) -> anyhow::Result<Option<i64>>;
    /// Find all projects, most recently created first.
    async fn find_all_order_by_created_at_desc(&self) -> anyhow::Result<Vec<Project>>;
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
/// Model for a showcased project.
pub struct Project {
    /// Project name, intended unique per source account.
    pub name: String,
    /// Free-text description. May be empty.
    pub description: String,
    /// Canonical link to the project's public page.
    pub url: String,
    /// Optional link to a live deployment. Empty when there is none.
    pub deploy: String,
    /// Creation time of the upstream repository, RFC 3339.
    pub created_at: String,
}

impl Project {
    /// Build a project from one upstream source record.
    ///
    /// `deploy` has no upstream counterpart and starts out empty.
    #[must_use]
    pub fn from_source(record: &SourceRecord) -> Self {
        Self {
            name: record.name.clone(),
            description: record.description.clone().unwrap_or_default(),
            url: record.html_url.clone(),
            deploy: String::new(),
            created_at: record.created_at.to_rfc3339(),
        }
    }
}

impl FromRow<'_, AnyRow> for Project {
    fn from_row(row: &AnyRow) -> anyhow::Result<Self, sqlx::Error> {
        Ok(Self {
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            url: row.try_get("url")?,
            deploy: row.try_get("deploy")?,
            created_at: row.try_get("created_at")?,
        })
    }
}
