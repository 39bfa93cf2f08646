//! A central place to register App routes.
use crate::server::api::state::Global;
use actix_service::ServiceFactory;
use actix_web::{
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    web, App, Error,
};

use super::pages;
use super::projects::{projects, sync_projects};

/// Central place to register all the App routing.
///
/// # Errors
/// Errors if routes cannot be registered.
#[tracing::instrument(skip(app, state))]
pub fn register_app<
    T: Global + Clone + 'static,
    U: MessageBody,
    V: ServiceFactory<
        ServiceRequest,
        Response = ServiceResponse<U>,
        Config = (),
        InitError = (),
        Error = Error,
    >,
>(
    mut app: App<V>,
    state: &T,
) -> anyhow::Result<App<V>> {
    app = app
        .service(web::resource("/sync-projects").to(sync_projects))
        .service(web::resource("/projects").to(projects))
        .service(web::resource("/").to(pages::landing))
        .service(web::resource("/home").to(pages::home))
        .service(web::resource("/about").to(pages::about))
        .app_data(web::Data::new(state.clone()));
    Ok(app)
}
