// ABOUTME: Skill route handlers for the portfolio's technology stack listing
// ABOUTME: Public read access with skill creation restricted to the authenticated admin
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Skill routes
//!
//! Skills feed the frontend's category-filtered stack section, so the
//! category must be one of the fixed taxonomy values.

use crate::{
    context::ServerResources,
    database_plugins::DatabaseProvider,
    errors::{AppError, AppResult},
    models::Skill,
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

/// Skill creation request
#[derive(Debug, Deserialize)]
pub struct CreateSkillRequest {
    /// Skill name, e.g. "React"
    #[serde(default)]
    pub name: String,
    /// Category name; must parse into the fixed taxonomy
    #[serde(default)]
    pub category: String,
    /// Icon name or URL for the frontend to render
    pub icon: Option<String>,
}

/// Skill route handlers
pub struct SkillRoutes;

impl SkillRoutes {
    /// List all skills
    pub async fn handle_list_skills(
        State(resources): State<Arc<ServerResources>>,
    ) -> AppResult<Response> {
        let skills = resources
            .database
            .list_skills()
            .await
            .map_err(|e| AppError::database(format!("Skill listing failed: {e}")))?;

        Ok(Json(skills).into_response())
    }

    /// Create a new skill
    pub async fn handle_create_skill(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<CreateSkillRequest>,
    ) -> AppResult<Response> {
        if request.name.trim().is_empty() {
            return Err(AppError::invalid_input("Skill name is required"));
        }

        let category = request.category.parse()?;

        let skill = Skill::new(request.name, category, request.icon);

        resources
            .database
            .create_skill(&skill)
            .await
            .map_err(|e| AppError::database(format!("Skill creation failed: {e}")))?;

        info!("Skill created: {} ({})", skill.name, skill.id);

        Ok((StatusCode::CREATED, Json(skill)).into_response())
    }
}
