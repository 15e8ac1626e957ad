// ABOUTME: Request ID middleware for correlation and structured logging
// ABOUTME: Generates a UUID per request and echoes it back in the response headers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

/// Header carrying the request correlation ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Correlation ID for a single request
///
/// Inserted into request extensions by [`request_id_middleware`] so handlers
/// and error reporting can tag their output with the same ID the client sees.
#[derive(Debug, Clone)]
pub struct RequestId(String);

impl RequestId {
    /// The ID as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Assign every request a correlation ID
///
/// An incoming `x-request-id` header is honored so IDs survive proxies;
/// otherwise a fresh UUID is generated. The ID is stored in request
/// extensions and echoed back on the response.
pub async fn request_id_middleware(mut req: Request, next: Next) -> Response {
    let request_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map_or_else(|| Uuid::new_v4().to_string(), ToOwned::to_owned);

    req.extensions_mut().insert(RequestId(request_id.clone()));

    let mut response = next.run(req).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}
