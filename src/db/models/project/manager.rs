//! Manager for the project model.
use crate::db::{DatabaseConnection, DatabaseKind};
use async_trait::async_trait;

use super::Project;

#[async_trait]
impl super::Manager for DatabaseConnection {
    /// Find a project by its name.
    ///
    /// # Errors
    /// Errors if can't establish a connection to the database.
    async fn find_by_name(&self, name: &str) -> anyhow::Result<Option<Project>> {
        let statement = "
            SELECT *
            FROM project
            WHERE name = $1
            LIMIT 1
        ";
        let row = match self.kind {
            DatabaseKind::Sqlite => {
                let mut connection = self.pool.acquire().await?;
                sqlx::query_as::<_, Project>(statement)
                    .bind(name)
                    .fetch_optional(&mut *connection)
                    .await?
            }
        };
        Ok(row)
    }

    /// Insert a new project into the database.
    ///
    /// # Errors
    /// Errors if the project cannot be inserted into the database.
    async fn create(&self, project: &Project) -> anyhow::Result<Option<i64>> {
        let statement = "
            INSERT INTO project ( name, description, url, deploy, created_at )
            VALUES ( $1, $2, $3, $4, $5 )
        ";
        let id = match self.kind {
            DatabaseKind::Sqlite => {
                let mut connection = self.pool.acquire().await?;
                sqlx::query(statement)
                    .bind(&project.name)
                    .bind(&project.description)
                    .bind(&project.url)
                    .bind(&project.deploy)
                    .bind(&project.created_at)
                    .execute(&mut *connection)
                    .await?
                    .last_insert_id()
            }
        };
        Ok(id)
    }

    /// Find all projects, most recently created first.
    ///
    /// `created_at` is RFC 3339 text, so the lexicographic sort is
    /// chronological.
    ///
    /// # Errors
    /// Errors if can't establish a connection to the database.
    async fn find_all_order_by_created_at_desc(&self) -> anyhow::Result<Vec<Project>> {
        let statement = "
            SELECT *
            FROM project
            ORDER BY created_at DESC
        ";
        let rows = match self.kind {
            DatabaseKind::Sqlite => {
                let mut connection = self.pool.acquire().await?;
                sqlx::query_as::<_, Project>(statement)
                    .fetch_all(&mut *connection)
                    .await?
            }
        };
        Ok(rows)
    }
}
