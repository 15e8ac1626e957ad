// ABOUTME: Admin authentication route handlers for login and initial setup
// ABOUTME: Provides credential verification, session token issuance, and the gated bootstrap endpoint
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Authentication routes for the admin identity gate
//!
//! This module handles admin login and the one-time setup endpoint. Login
//! answers the same 400 body for an unknown username and a wrong password,
//! so the response never reveals which half of the credential pair failed.
//! Setup refuses to run once any admin record exists and can additionally
//! be locked behind an out-of-band secret.

use crate::{
    auth,
    constants::auth as auth_constants,
    context::ServerResources,
    database_plugins::DatabaseProvider,
    errors::{AppError, AppResult},
    logging::AppLogger,
    models::Admin,
    routes::MessageResponse,
};
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use subtle::ConstantTimeEq;
use tracing::info;

/// Admin login request
///
/// Fields default to empty strings when absent, so a request missing either
/// one fails the credential check exactly like a wrong value instead of
/// producing a deserialization error with a different shape.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Admin username
    #[serde(default)]
    pub username: String,
    /// Admin password in plaintext, verified against the stored hash
    #[serde(default)]
    pub password: String,
}

/// Successful login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Signed session token; the client sends it back on privileged requests
    pub token: String,
}

/// Initial admin bootstrap request
#[derive(Debug, Deserialize)]
pub struct SetupRequest {
    /// Username for the new admin
    #[serde(default)]
    pub username: String,
    /// Password for the new admin, stored as a bcrypt hash
    #[serde(default)]
    pub password: String,
}

/// Authentication routes
pub struct AuthRoutes;

impl AuthRoutes {
    /// Create the login and setup routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/auth/login", post(Self::handle_login))
            .route("/api/auth/setup", post(Self::handle_setup))
            .with_state(resources)
    }

    /// Handle admin login
    ///
    /// Looks the admin up by username and verifies the password against the
    /// stored bcrypt hash on a blocking thread. Both failure branches return
    /// the identical 400 body.
    async fn handle_login(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<LoginRequest>,
    ) -> AppResult<Response> {
        info!("Admin login attempt for username: {}", request.username);

        let Some(admin) = resources
            .database
            .get_admin_by_username(&request.username)
            .await
            .map_err(|e| AppError::database(format!("Admin lookup failed: {e}")))?
        else {
            AppLogger::log_auth_event(&request.username, "login", false, Some("unknown username"));
            return Err(AppError::invalid_credentials());
        };

        // Verify password using spawn_blocking to avoid stalling the async
        // executor on the bcrypt work factor
        let password = request.password;
        let password_hash = admin.password_hash.clone();
        let is_valid =
            tokio::task::spawn_blocking(move || auth::verify_password(&password, &password_hash))
                .await
                .map_err(|e| {
                    AppError::internal(format!("Password verification task failed: {e}"))
                })?;

        if !is_valid {
            AppLogger::log_auth_event(&admin.username, "login", false, Some("wrong password"));
            return Err(AppError::invalid_credentials());
        }

        let token = resources
            .auth_manager
            .generate_token(&admin)
            .map_err(|e| AppError::internal(format!("Failed to issue session token: {e}")))?;

        AppLogger::log_auth_event(&admin.username, "login", true, None);
        info!("Admin logged in successfully: {}", admin.username);

        Ok((StatusCode::OK, Json(LoginResponse { token })).into_response())
    }

    /// Handle initial admin setup
    ///
    /// Creates the first admin record. Refused once any admin exists, and
    /// refused without the configured setup secret when one is set. The
    /// UNIQUE constraint on the username backs the existence check, so two
    /// concurrent setup requests can never both succeed.
    async fn handle_setup(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<SetupRequest>,
    ) -> AppResult<Response> {
        Self::check_setup_gate(&headers, &resources)?;

        if request.username.trim().is_empty() || request.password.is_empty() {
            return Err(AppError::invalid_input("Username and password are required"));
        }

        let admin_count = resources
            .database
            .count_admins()
            .await
            .map_err(|e| AppError::database(format!("Admin count failed: {e}")))?;

        if admin_count > 0 {
            AppLogger::log_security_event(
                "setup_after_bootstrap",
                "medium",
                "Setup requested but an admin record already exists",
                Some(&request.username),
            );
            return Err(AppError::admin_exists());
        }

        let password = request.password;
        let password_hash = tokio::task::spawn_blocking(move || auth::hash_password(&password))
            .await
            .map_err(|e| AppError::internal(format!("Password hashing task failed: {e}")))?
            .map_err(|e| AppError::internal(format!("Failed to hash password: {e}")))?;

        let admin = Admin::new(request.username, password_hash);

        let created = resources
            .database
            .create_admin(&admin)
            .await
            .map_err(|e| AppError::database(format!("Admin creation failed: {e}")))?;

        if created.is_none() {
            // Lost the race to a concurrent setup between the count check
            // and the insert
            return Err(AppError::admin_exists());
        }

        AppLogger::log_auth_event(&admin.username, "setup", true, None);
        info!("Initial admin created: {}", admin.username);

        Ok((
            StatusCode::CREATED,
            Json(MessageResponse::new(
                crate::constants::messages::ADMIN_CREATED,
            )),
        )
            .into_response())
    }

    /// Enforce the optional out-of-band setup secret
    ///
    /// When `SETUP_SECRET` is configured the request must carry the same
    /// value in the `x-setup-secret` header. The comparison is constant
    /// time so response latency does not leak how much of the secret
    /// matched.
    fn check_setup_gate(headers: &HeaderMap, resources: &Arc<ServerResources>) -> AppResult<()> {
        let Some(expected) = resources.config.auth.setup_secret.as_deref() else {
            return Ok(());
        };

        let provided = headers
            .get(auth_constants::SETUP_SECRET_HEADER)
            .and_then(|h| h.to_str().ok())
            .unwrap_or("");

        if bool::from(provided.as_bytes().ct_eq(expected.as_bytes())) {
            Ok(())
        } else {
            AppLogger::log_security_event(
                "setup_secret_mismatch",
                "high",
                "Setup requested without the correct setup secret",
                None,
            );
            Err(AppError::permission_denied("Setup is not permitted"))
        }
    }
}
