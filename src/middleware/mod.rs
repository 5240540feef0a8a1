// ABOUTME: HTTP middleware for cross-origin access and request tracing
// ABOUTME: Provides CORS configuration, request ID generation, and per-request spans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// CORS layer built from server configuration
pub mod cors;
/// Request ids and per-request spans
pub mod tracing;

// CORS configuration
pub use cors::setup_cors;

// Request tracing
pub use tracing::{create_request_span, propagate_request_id, set_request_id, RequestSpanMaker};
