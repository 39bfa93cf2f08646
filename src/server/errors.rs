//! Error bodies for HTTP responses.
use derive_more::Display;

/// Errors surfaced in HTTP response bodies.
#[derive(Debug, Display)]
pub enum HTTPError {
    /// The upstream source could not be reached or could not be trusted.
    #[display(fmt = "Upstream source failed")]
    BadGateway,
    /// The project store rejected a read.
    #[display(fmt = "Store unavailable")]
    InternalError,
}

impl std::error::Error for HTTPError {}
