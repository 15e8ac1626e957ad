// ABOUTME: Project portfolio route handlers for listing, creating, and deleting projects
// ABOUTME: Public read access with writes restricted to the authenticated admin
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Project routes
//!
//! The project list is the public portfolio page payload; create and
//! delete are mounted behind the admin session guard by the router
//! assembly.

use crate::{
    context::ServerResources,
    database_plugins::DatabaseProvider,
    errors::{AppError, AppResult},
    models::Project,
    routes::MessageResponse,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

/// Project creation request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    /// Project title
    #[serde(default)]
    pub title: String,
    /// Project description
    #[serde(default)]
    pub description: String,
    /// Cover image URL
    #[serde(default)]
    pub image: String,
    /// Link to the deployed project
    pub live_link: Option<String>,
    /// Link to the source repository
    pub github_link: Option<String>,
    /// Freeform technology tags
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Project route handlers
pub struct ProjectRoutes;

impl ProjectRoutes {
    /// List all projects, newest first
    pub async fn handle_list_projects(
        State(resources): State<Arc<ServerResources>>,
    ) -> AppResult<Response> {
        let projects = resources
            .database
            .list_projects()
            .await
            .map_err(|e| AppError::database(format!("Project listing failed: {e}")))?;

        Ok(Json(projects).into_response())
    }

    /// Create a new project
    pub async fn handle_create_project(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<CreateProjectRequest>,
    ) -> AppResult<Response> {
        if request.title.trim().is_empty()
            || request.description.trim().is_empty()
            || request.image.trim().is_empty()
        {
            return Err(AppError::invalid_input(
                "Title, description and image are required",
            ));
        }

        let project = Project::new(
            request.title,
            request.description,
            request.image,
            request.live_link,
            request.github_link,
            request.tags,
        );

        resources
            .database
            .create_project(&project)
            .await
            .map_err(|e| AppError::database(format!("Project creation failed: {e}")))?;

        info!("Project created: {} ({})", project.title, project.id);

        Ok((StatusCode::CREATED, Json(project)).into_response())
    }

    /// Delete a project by ID
    pub async fn handle_delete_project(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> AppResult<Response> {
        let deleted = resources
            .database
            .delete_project(&id)
            .await
            .map_err(|e| AppError::database(format!("Project deletion failed: {e}")))?;

        if deleted == 0 {
            return Err(AppError::not_found("Project"));
        }

        info!("Project deleted: {id}");

        Ok(Json(MessageResponse::new(
            crate::constants::messages::PROJECT_DELETED,
        ))
        .into_response())
    }
}
