//! The presentation boundary.
//!
//! Rendering is not this service's concern: handlers hand a view name and a
//! data context across this boundary and send back whatever comes out. The
//! shipped implementation is a JSON passthrough, which turns the site into a
//! pure API; an HTML template service plugs in by implementing [`Renderer`].
use actix_web::http::header::ContentType;
use serde_json::Value;

/// Output of the presentation boundary, ready to be sent as a response body.
pub struct Rendered {
    /// Response body.
    pub body: String,
    /// Content type of the body.
    pub content_type: ContentType,
}

/// Renders a named view with a data context.
pub trait Renderer: Send + Sync {
    /// Render `view` with `context`.
    ///
    /// # Errors
    /// Errors if the view cannot be rendered.
    fn render(&self, view: &str, context: &Value) -> anyhow::Result<Rendered>;
}

/// Passthrough renderer: emits the context itself as JSON.
#[derive(Debug, Clone, Copy)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, _view: &str, context: &Value) -> anyhow::Result<Rendered> {
        Ok(Rendered {
            body: serde_json::to_string(context)?,
            content_type: ContentType::json(),
        })
    }
}
