//! Tracing/logging for HTTP servers

use std::time::Instant;

use actix_web::{
    dev::{ServiceRequest, ServiceResponse},
    HttpMessage,
};
use tracing_actix_web::{DefaultRootSpanBuilder, RootSpanBuilder};

use crate::source::github::REQUEST_TIMEOUT_SECS;

/// Milliseconds after which a request is considered slow. The sync endpoint
/// blocks on one upstream GET, so anything under the outbound timeout is the
/// upstream's latency; a request slower than that means the store or the
/// service itself is dragging.
const SLOW_REQUEST_MS: u128 = (REQUEST_TIMEOUT_SECS as u128) * 1000;

/// More or less an alias just to add custom functionality to `DefaultRootSpanBuilder`
pub struct VitrineRootSpanBuilder;

/// For measuring the duration of a request
struct RequestStart(Instant);

impl RootSpanBuilder for VitrineRootSpanBuilder {
    fn on_request_start(request: &ServiceRequest) -> tracing::Span {
        {
            let mut request_extensions = request.extensions_mut();
            request_extensions.insert(RequestStart(Instant::now()));
        }

        // The `RootSpan` rides along with every `tracing::*` call for the
        // lifetime of the request: user agent, HTTP path, a request_id, plus
        // the duration fields recorded below once the response is out.
        tracing_actix_web::root_span!(
            request,
            duration_ms = tracing::field::Empty,
            duration_ns = tracing::field::Empty,
        )
    }

    fn on_request_end<B: actix_web::body::MessageBody>(
        span: tracing::Span,
        outcome: &Result<ServiceResponse<B>, actix_web::Error>,
    ) {
        let () = outcome.as_ref().map_or((), |response| {
            if let Some(req_start) = response.request().extensions().get::<RequestStart>() {
                let elapsed = req_start.0.elapsed();
                let millis = elapsed.as_millis();
                span.record("duration_ms", millis);
                span.record("duration_ns", elapsed.as_nanos());
                if millis > SLOW_REQUEST_MS {
                    tracing::warn!(duration_ms = millis, "Slow HTTP request");
                } else {
                    tracing::trace!("HTTP Request");
                }
            }
        });
        // Captures the standard `RootSpan` fields
        DefaultRootSpanBuilder::on_request_end(span, outcome);
    }
}
