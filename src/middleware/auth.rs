// ABOUTME: Session token guard for privileged admin routes
// ABOUTME: Validates the JWT, resolves the admin record, and injects it into request extensions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Admin Session Guard
//!
//! This middleware protects the mutating portfolio endpoints. It extracts the
//! session token from the request, validates signature and expiry, and looks
//! the admin record up by the token's subject. The resolved identity is
//! injected into request extensions so handlers never re-validate the token.
//!
//! Requests without a token are rejected with 401 before the handler runs.
//! A token whose subject no longer matches a stored admin is rejected the
//! same way, so deleting an admin record immediately revokes its sessions.

use crate::constants::auth as auth_constants;
use crate::context::ServerResources;
use crate::database_plugins::DatabaseProvider;
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Fixed body for every rejected token so the response does not reveal
/// whether the signature, the expiry, or the subject lookup failed
const TOKEN_REJECTED: &str = "Invalid or expired token";

/// Admin identity resolved by [`admin_auth_middleware`]
///
/// Inserted into request extensions on every request that passes the guard.
/// Handlers behind the guard can rely on it being present.
#[derive(Debug, Clone)]
pub struct AdminIdentity {
    /// Record ID of the authenticated admin
    pub admin_id: String,
    /// Username of the authenticated admin
    pub username: String,
}

/// Extract the session token from request headers
///
/// Accepts `Authorization: Bearer <token>` from API clients and the bare
/// `x-auth-token` header the web dashboard sends.
fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get("authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|auth| auth.strip_prefix("Bearer "))
        .map(ToOwned::to_owned)
        .or_else(|| {
            headers
                .get(auth_constants::AUTH_TOKEN_HEADER)
                .and_then(|h| h.to_str().ok())
                .map(ToOwned::to_owned)
        })
}

/// Session token middleware for privileged routes
///
/// Layer this over any route that mutates portfolio content or reads
/// private data:
///
/// ```rust,no_run
/// use axum::{middleware, routing::post, Router};
/// use folio_api::context::ServerResources;
/// use folio_api::middleware::auth::admin_auth_middleware;
/// use std::sync::Arc;
///
/// # async fn handler() -> &'static str { "" }
/// # fn example(resources: Arc<ServerResources>) {
/// let protected: Router<Arc<ServerResources>> = Router::new()
///     .route("/api/projects", post(handler))
///     .route_layer(middleware::from_fn_with_state(
///         resources.clone(),
///         admin_auth_middleware,
///     ));
/// # }
/// ```
///
/// # Errors
///
/// Returns 401 when the token is missing, fails validation, or names an
/// admin that no longer exists.
pub async fn admin_auth_middleware(
    State(resources): State<Arc<ServerResources>>,
    mut req: Request,
    next: Next,
) -> AppResult<Response> {
    let path = req.uri().path().to_owned();

    let Some(token) = extract_session_token(req.headers()) else {
        AppLogger::log_security_event(
            "missing_session_token",
            "low",
            &format!("Privileged request to {path} carried no session token"),
            None,
        );
        return Err(AppError::auth_required());
    };

    let claims = resources.auth_manager.validate_token(&token).map_err(|e| {
        AppLogger::log_security_event(
            "session_token_rejected",
            "medium",
            &format!("Privileged request to {path} carried a rejected token: {e}"),
            None,
        );
        AppError::auth_invalid(TOKEN_REJECTED)
    })?;

    let admin = resources
        .database
        .get_admin_by_id(&claims.sub)
        .await
        .map_err(|e| AppError::database(format!("Admin lookup failed: {e}")))?
        .ok_or_else(|| {
            warn!(
                admin_id = %claims.sub,
                "Valid session token for an admin record that no longer exists"
            );
            AppError::auth_invalid(TOKEN_REJECTED)
        })?;

    debug!(admin = %admin.username, path = %path, "Admin session verified");
    req.extensions_mut().insert(AdminIdentity {
        admin_id: admin.id,
        username: admin.username,
    });

    Ok(next.run(req).await)
}
