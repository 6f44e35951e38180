//! Tracing/logging for HTTP servers

use std::time::Instant;

use actix_web::{
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    HttpMessage,
};
use tracing_actix_web::{DefaultRootSpanBuilder, RootSpanBuilder};

/// The length of time in milliseconds after which a request is considered slow
const SLOW_REQUEST_MS: u128 = 5 * 1000;

/// More or less an alias just to add custom functionality to `DefaultRootSpanBuilder`
pub struct FolioRootSpanBuilder;

/// For measuring the duration of a request
struct RequestStart(Instant);

impl RootSpanBuilder for FolioRootSpanBuilder {
    fn on_request_start(request: &ServiceRequest) -> tracing::Span {
        {
            let mut request_extensions = request.extensions_mut();
            request_extensions.insert(RequestStart(Instant::now()));
        }

        // The `RootSpan` is attached to every `tracing::*` call for the lifetime of the
        // HTTP request: user agent, path, a unique `request_id`, etc. That makes it
        // possible to follow one request through interleaved log lines.
        tracing_actix_web::root_span!(
            request,
            duration_ms = tracing::field::Empty,
            duration_ns = tracing::field::Empty,
        )
    }

    fn on_request_end<B: MessageBody>(
        span: tracing::Span,
        outcome: &Result<ServiceResponse<B>, actix_web::Error>,
    ) {
        let () = outcome.as_ref().map_or((), |response| {
            if let Some(req_start) = response.request().extensions().get::<RequestStart>() {
                let elapsed = req_start.0.elapsed();
                let millis = elapsed.as_millis();
                // Add the timings to the default `RootSpan`
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
