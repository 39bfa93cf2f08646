//! Serve the portfolio backend.
#![allow(clippy::exit, reason = "Startup failures exit with a known code")]
use crate::db;
use crate::server::api::state::App as AppState;
use crate::server::render::JsonRenderer;
use crate::server::tracing::VitrineRootSpanBuilder;
use crate::source::{github::GithubSource, ProjectSource};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::{App, Error, HttpServer};
use tracing_actix_web::TracingLogger;

use std::sync::Arc;
use std::{io, process};

use actix_http::body::MessageBody;
use actix_service::ServiceFactory;

use super::api::routes;
use super::api::state::Global;
use super::render::Renderer;

/// Serve the portfolio for the given source account.
#[actix_web::main]
pub async fn serve(account: &str, port: u16) -> io::Result<()> {
    let bind = "127.0.0.1";
    tracing::info!("Running portfolio server for '{account}' on http://{bind}:{port}.");

    let db = match db::init::connect().await {
        Ok(db) => db,
        Err(err) => {
            tracing::error!(
                "error: could not connect to project store. Confirm that DATABASE_URL env var is set correctly."
            );
            tracing::error!("Error: {:?}", err);
            process::exit(1);
        }
    };

    let source = match GithubSource::new(account) {
        Ok(source) => source,
        Err(err) => {
            tracing::error!("error: could not construct source client.");
            tracing::error!("Error: {:?}", err);
            process::exit(1);
        }
    };

    let state = AppState {
        db,
        source: Arc::new(source) as Arc<dyn ProjectSource>,
        renderer: Arc::new(JsonRenderer) as Arc<dyn Renderer>,
    };

    HttpServer::new(move || {
        init_app(&state).unwrap_or_else(|err| {
            tracing::error!("Unable to initialize app.");
            tracing::error!("Error: {:?}", err);
            process::exit(1);
        })
    })
    .bind((bind, port))?
    .run()
    .await
}

/// Initialize the application and all possible routing at start-up time.
///
/// # Arguments
/// * `state` - The application state
/// # Errors
/// Will error if unable to initialize the application
pub fn init_app<T: Global + Clone + 'static>(
    state: &T,
) -> anyhow::Result<
    App<
        impl ServiceFactory<
            ServiceRequest,
            Response = ServiceResponse<impl MessageBody>,
            Config = (),
            InitError = (),
            Error = Error,
        >,
    >,
> {
    let app = routes::register_app(
        App::new().wrap(TracingLogger::<VitrineRootSpanBuilder>::new()),
        state,
    )?;
    Ok(app)
}
