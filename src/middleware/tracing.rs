// ABOUTME: Request tracing middleware for correlation and structured logging
// ABOUTME: Generates x-request-id values and opens one span per HTTP request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::routes::REQUEST_ID_HEADER;
use axum::http::{HeaderName, Request};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::MakeSpan;
use tracing::Span;

/// Create a tracing span for HTTP requests
pub fn create_request_span(method: &str, path: &str) -> Span {
    tracing::info_span!(
        "http_request",
        method = %method,
        path = %path,
        request_id = tracing::field::Empty,
        status_code = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    )
}

/// Span maker for `TraceLayer` that records the request id set upstream
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSpanMaker;

impl<B> MakeSpan<B> for RequestSpanMaker {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        let span = create_request_span(request.method().as_str(), request.uri().path());
        if let Some(id) = request
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
        {
            span.record("request_id", id);
        }
        span
    }
}

/// Assign a UUID `x-request-id` to requests that lack one
#[must_use]
pub fn set_request_id() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::new(HeaderName::from_static(REQUEST_ID_HEADER), MakeRequestUuid)
}

/// Copy the request's `x-request-id` onto the response
#[must_use]
pub fn propagate_request_id() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::new(HeaderName::from_static(REQUEST_ID_HEADER))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedOutput {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Log one event inside the span made for `request` and return the output
    fn log_within_span(request: &Request<()>) -> String {
        let output = CapturedOutput::default();
        let writer = output.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let span = RequestSpanMaker.make_span(request);
            let _entered = span.enter();
            tracing::info!("handled");
        });

        let bytes = output.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_span_records_method_path_and_request_id() {
        let request = Request::builder()
            .method("DELETE")
            .uri("/api/ingredients/abc")
            .header(REQUEST_ID_HEADER, "abc-123")
            .body(())
            .unwrap();

        let logged = log_within_span(&request);
        assert!(logged.contains("http_request"), "{logged}");
        assert!(logged.contains("method=DELETE"), "{logged}");
        assert!(logged.contains("path=/api/ingredients/abc"), "{logged}");
        assert!(logged.contains("abc-123"), "{logged}");
    }

    #[test]
    fn test_span_leaves_request_id_empty_without_header() {
        let request = Request::builder().uri("/health").body(()).unwrap();

        let logged = log_within_span(&request);
        assert!(logged.contains("path=/health"), "{logged}");
        assert!(!logged.contains("request_id"), "{logged}");
    }
}
