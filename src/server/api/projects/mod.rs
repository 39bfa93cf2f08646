//! Handlers for syncing and listing showcased projects.
#![allow(clippy::unused_async, reason = "Actix handlers are async by contract")]
use actix_web::{web, HttpResponse, Responder};

use crate::{
    db::models::project::Manager as _,
    server::errors::HTTPError,
    sync,
};

use super::state::{App as AppState, Global as _};

/// Handler for the sync endpoint.
///
/// Fetches the account's repository list from the external source and merges
/// it into the project store. Responds with the aggregate
/// `{created, skipped, failed}` summary, or `502 Bad Gateway` when the
/// source itself fails outright; in that case no record can be trusted and
/// the store is left untouched.
#[tracing::instrument(skip(data))]
pub async fn sync_projects(data: web::Data<AppState>) -> impl Responder {
    let records = match data.source().fetch_projects().await {
        Ok(records) => records,
        Err(err) => {
            tracing::error!("Error fetching source records: {err}");
            return HttpResponse::BadGateway().body(HTTPError::BadGateway.to_string());
        }
    };
    let summary = sync::reconcile(data.db(), &records).await;
    HttpResponse::Ok().json(summary)
}

/// Handler for the listing endpoint.
///
/// Reads the store, most recently created project first, and forwards the
/// sequence unmodified to the presentation boundary.
#[tracing::instrument(skip(data))]
pub async fn projects(data: web::Data<AppState>) -> impl Responder {
    let all_projects = match data.db().find_all_order_by_created_at_desc().await {
        Ok(all_projects) => all_projects,
        Err(err) => {
            tracing::error!("Error reading project store: {err}");
            return HttpResponse::InternalServerError().body(HTTPError::InternalError.to_string());
        }
    };
    let context = match serde_json::to_value(&all_projects) {
        Ok(context) => context,
        Err(err) => {
            tracing::error!("Error building view context: {err}");
            return HttpResponse::InternalServerError().body(HTTPError::InternalError.to_string());
        }
    };
    match data.renderer().render("projects", &context) {
        Ok(rendered) => HttpResponse::Ok()
            .insert_header(rendered.content_type)
            .body(rendered.body),
        Err(err) => {
            tracing::error!("Error rendering projects view: {err}");
            HttpResponse::InternalServerError().body(HTTPError::InternalError.to_string())
        }
    }
}
