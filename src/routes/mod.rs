// ABOUTME: Route module organization for the Folio API HTTP endpoints
// ABOUTME: Provides route definitions organized by domain plus the assembled application router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Route module for the Folio API
//!
//! This module organizes all HTTP routes by domain. Each domain module
//! contains route definitions and thin handler functions; [`router`]
//! assembles them into the full application with middleware applied and
//! the privileged routes behind the admin session guard.

/// Authentication and admin bootstrap routes
pub mod auth;
/// Health check and API banner routes
pub mod health;
/// Contact message routes
pub mod messages;
/// Project portfolio routes
pub mod projects;
/// Skill listing routes
pub mod skills;
/// Media upload routes
pub mod uploads;

/// Authentication route handlers
pub use auth::AuthRoutes;
/// Login request payload
pub use auth::LoginRequest;
/// Login response with token
pub use auth::LoginResponse;
/// Initial admin bootstrap payload
pub use auth::SetupRequest;
/// Health check route handlers
pub use health::HealthRoutes;
/// Contact message route handlers
pub use messages::MessageRoutes;
/// Project route handlers
pub use projects::ProjectRoutes;
/// Skill route handlers
pub use skills::SkillRoutes;
/// Upload route handlers
pub use uploads::UploadRoutes;

use crate::constants::limits;
use crate::context::ServerResources;
use crate::middleware::{admin_auth_middleware, request_id_middleware, setup_cors};
use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{delete, get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer};

/// Message-only response body used by several endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable outcome
    pub message: String,
}

impl MessageResponse {
    /// Build a response around a message string
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Assemble the full application router
///
/// Read access to portfolio content is public; everything that mutates
/// content or reads the inbox sits behind the admin session guard.
pub fn router(resources: Arc<ServerResources>) -> Router {
    let guarded = Router::new()
        .route("/api/projects", post(ProjectRoutes::handle_create_project))
        .route(
            "/api/projects/:id",
            delete(ProjectRoutes::handle_delete_project),
        )
        .route("/api/skills", post(SkillRoutes::handle_create_skill))
        .route("/api/messages", get(MessageRoutes::handle_list_messages))
        // route_layer keeps these as method routers, so the merge below can
        // combine them with the public handlers registered on the same paths.
        .route_layer(middleware::from_fn_with_state(
            resources.clone(),
            admin_auth_middleware,
        ))
        .with_state(resources.clone());

    let public = Router::new()
        .route("/api/projects", get(ProjectRoutes::handle_list_projects))
        .route("/api/skills", get(SkillRoutes::handle_list_skills))
        .route("/api/messages", post(MessageRoutes::handle_create_message))
        .route("/uploads/:filename", get(UploadRoutes::handle_serve_upload))
        .with_state(resources.clone());

    // The upload route needs its own body cap: a full-size file plus the
    // multipart framing must fit, while every other route keeps the
    // default JSON-sized limit.
    let upload = Router::new()
        .route("/api/upload", post(UploadRoutes::handle_upload))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(
            limits::MAX_UPLOAD_BYTES + limits::MULTIPART_OVERHEAD_BYTES,
        ))
        .with_state(resources.clone());

    Router::new()
        .merge(HealthRoutes::routes())
        .merge(AuthRoutes::routes(resources.clone()))
        .merge(guarded)
        .merge(public)
        .merge(upload)
        .layer(TraceLayer::new_for_http())
        .layer(setup_cors(&resources.config))
        .layer(TimeoutLayer::new(Duration::from_secs(
            limits::REQUEST_TIMEOUT_SECS,
        )))
        .layer(middleware::from_fn(request_id_middleware))
}
