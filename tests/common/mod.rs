use actix_http::body::MessageBody;
use actix_http::Request;
use actix_service::Service;
use actix_web::{dev::ServiceResponse, test, Error};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tempfile::{Builder, TempDir};

use vitrine::db::{init, DatabaseConnection};
use vitrine::server::api::state::App as AppState;
use vitrine::server::app::init_app;
use vitrine::server::render::JsonRenderer;
use vitrine::source::{ProjectSource, SourceError, SourceRecord};

/// Source stand-in with a canned outcome.
pub enum StubSource {
    /// Fetch succeeds with these records.
    Records(Vec<SourceRecord>),
    /// Fetch fails as if the upstream returned a server error.
    Unavailable,
    /// Fetch fails as if the upstream body did not parse as a list.
    Malformed,
}

#[async_trait]
impl ProjectSource for StubSource {
    async fn fetch_projects(&self) -> Result<Vec<SourceRecord>, SourceError> {
        match self {
            Self::Records(records) => Ok(records.clone()),
            Self::Unavailable => Err(SourceError::Unavailable(
                "https://api.invalid/users/test/repos returned 500".into(),
            )),
            Self::Malformed => Err(SourceError::Malformed(
                "invalid type: map, expected a sequence".into(),
            )),
        }
    }
}

pub fn record(name: &str, html_url: &str, created_at: &str) -> SourceRecord {
    SourceRecord {
        name: name.to_owned(),
        description: None,
        html_url: html_url.to_owned(),
        created_at: DateTime::parse_from_rfc3339(created_at)
            .unwrap()
            .with_timezone(&Utc),
    }
}

/// Fresh file-backed sqlite store in a temp directory.
///
/// The returned `TempDir` must be kept alive for the lifetime of the
/// connection.
pub async fn initialize_store() -> (TempDir, DatabaseConnection) {
    let td = Builder::new().tempdir().unwrap();
    let db_url = format!(
        "sqlite://{}/test.sqlite3?mode=rwc",
        td.path().to_string_lossy()
    );
    let db = init::connect_url(&db_url).await.unwrap();
    (td, db)
}

pub async fn initialize_app(
    db: DatabaseConnection,
    source: StubSource,
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = Error> {
    let state = AppState {
        db,
        source: Arc::new(source),
        renderer: Arc::new(JsonRenderer),
    };
    let app = init_app(&state).unwrap();
    test::init_service(app).await
}
