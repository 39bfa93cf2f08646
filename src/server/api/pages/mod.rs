//! Handlers for the static site pages.
//!
//! Each page forwards its view name and an empty context across the
//! presentation boundary. What the visitor sees is whatever the plugged-in
//! renderer produces for that view.
#![allow(clippy::unused_async, reason = "Actix handlers are async by contract")]
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::server::errors::HTTPError;

use super::state::{App as AppState, Global as _};

/// Landing page.
pub async fn landing(data: web::Data<AppState>) -> impl Responder {
    render_page(&data, "landing")
}

/// Home page.
pub async fn home(data: web::Data<AppState>) -> impl Responder {
    render_page(&data, "home")
}

/// About page.
pub async fn about(data: web::Data<AppState>) -> impl Responder {
    render_page(&data, "about")
}

/// Forward a page view with an empty context to the presentation boundary.
fn render_page(data: &web::Data<AppState>, view: &str) -> HttpResponse {
    match data.renderer().render(view, &json!({})) {
        Ok(rendered) => HttpResponse::Ok()
            .insert_header(rendered.content_type)
            .body(rendered.body),
        Err(err) => {
            tracing::error!("Error rendering {view} view: {err}");
            HttpResponse::InternalServerError().body(HTTPError::InternalError.to_string())
        }
    }
}
