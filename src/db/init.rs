//! Database connection and schema bootstrap.
use crate::db::{Db as _, DatabaseConnection, DatabaseKind};
use std::env;

/// Connects to the project store and ensures its schema exists.
/// We use `SQLite` by default, but we can override this by setting the `DATABASE_URL` environment variable.
///
/// # Errors
/// Errors if connection to database fails.
/// Connections can fail if the database is not running, or if the database URL is invalid.
pub async fn connect() -> anyhow::Result<DatabaseConnection> {
    let db_url = env::var("DATABASE_URL")
        .unwrap_or_else(|_| String::from("sqlite://vitrine.sqlite3?mode=rwc"));
    connect_url(&db_url).await
}

/// Connects to the project store at `db_url` and ensures its schema exists.
///
/// # Errors
/// Errors if connection to database fails or the schema cannot be created.
pub async fn connect_url(db_url: &str) -> anyhow::Result<DatabaseConnection> {
    let connection = DatabaseConnection::connect(db_url).await?;
    tracing::info!("Connected to database");
    create_schema(&connection).await?;
    Ok(connection)
}

/// Create the `project` table if it does not yet exist.
///
/// `created_at` is stored as RFC 3339 text so that lexicographic ordering
/// matches chronological ordering. `name` carries no uniqueness constraint;
/// the sync reconciler is the sole writer and checks for existing names
/// before inserting.
async fn create_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    let statement = "
        CREATE TABLE IF NOT EXISTS project (
            name TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            url TEXT NOT NULL,
            deploy TEXT NOT NULL DEFAULT '',
            created_at TEXT NOT NULL
        )
    ";
    match conn.kind {
        DatabaseKind::Sqlite => {
            let mut connection = conn.pool.acquire().await?;
            sqlx::query(statement).execute(&mut *connection).await?;
        }
    }
    Ok(())
}
