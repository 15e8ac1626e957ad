// ABOUTME: CORS middleware configuration for HTTP API endpoints
// ABOUTME: Provides Cross-Origin Resource Sharing setup for web client access
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use http::{header::HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Configure CORS settings for the portfolio API
///
/// Configures cross-origin requests based on the `CORS_ALLOWED_ORIGINS`
/// configuration. Supports wildcard ("*") for development, specific origin
/// lists for production, and `*.suffix` entries that admit every deploy
/// preview under a hosting domain.
///
/// # Allowed Headers
///
/// - Standard headers: content-type, authorization, accept, origin
/// - Session header the web dashboard sends: x-auth-token
/// - Setup gate header: x-setup-secret
///
/// # Examples
///
/// ```bash
/// # Allow all origins (development)
/// export CORS_ALLOWED_ORIGINS="*"
///
/// # Allow specific origins plus Vercel previews (production)
/// export CORS_ALLOWED_ORIGINS="https://www.example.com,*.vercel.app"
/// ```
pub fn setup_cors(config: &crate::config::environment::ServerConfig) -> CorsLayer {
    let origins = &config.security.cors_origins;

    let allow_origin = if origins.is_empty() || origins.iter().any(|o| o == "*") {
        // Development mode: allow any origin
        AllowOrigin::any()
    } else if origins.iter().any(|o| o.starts_with('*')) {
        // Suffix patterns need per-request matching
        let patterns = origins.clone();
        AllowOrigin::predicate(move |origin: &HeaderValue, _| {
            origin
                .to_str()
                .is_ok_and(|origin| origin_allowed(&patterns, origin))
        })
    } else {
        let list: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();

        if list.is_empty() {
            // Fallback to any if parsing failed
            AllowOrigin::any()
        } else {
            AllowOrigin::list(list)
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("authorization"),
            HeaderName::from_static("x-auth-token"),
            HeaderName::from_static("x-setup-secret"),
            HeaderName::from_static("x-requested-with"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
        ])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
}

/// Check a request origin against the configured origin patterns
///
/// An entry starting with `*` matches any origin ending in the rest of the
/// pattern, so `*.vercel.app` admits both `https://app.vercel.app` and
/// `https://pr-42-app.vercel.app`. All other entries must match exactly.
fn origin_allowed(patterns: &[String], origin: &str) -> bool {
    patterns.iter().any(|pattern| {
        pattern
            .strip_prefix('*')
            .map_or_else(|| pattern == origin, |suffix| origin.ends_with(suffix))
    })
}
