//! Centralized state management for the Actix web server
use std::fmt;
use std::sync::Arc;

use crate::{db, server::render::Renderer, source::ProjectSource};

/// Global, read-only state
pub trait Global {
    /// Project store connection
    fn db(&self) -> &db::DatabaseConnection;
    /// External listing source
    fn source(&self) -> &Arc<dyn ProjectSource>;
    /// Presentation boundary
    fn renderer(&self) -> &Arc<dyn Renderer>;
}

/// Application state
///
/// Every handle is constructed once at startup and passed down explicitly;
/// there is no ambient module-level connection.
#[derive(Clone)]
pub struct App {
    /// Project store connection
    pub db: db::DatabaseConnection,
    /// External listing source
    pub source: Arc<dyn ProjectSource>,
    /// Presentation boundary
    pub renderer: Arc<dyn Renderer>,
}

impl Global for App {
    fn db(&self) -> &db::DatabaseConnection {
        &self.db
    }

    fn source(&self) -> &Arc<dyn ProjectSource> {
        &self.source
    }

    fn renderer(&self) -> &Arc<dyn Renderer> {
        &self.renderer
    }
}

impl fmt::Debug for App {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "App state for store {:?}", self.db.kind)
    }
}
