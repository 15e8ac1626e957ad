// ABOUTME: Contact message route handlers for the public hire-me form
// ABOUTME: Public submission endpoint with the inbox list restricted to the authenticated admin
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Contact message routes
//!
//! Visitors submit inquiries without authenticating; only the admin reads
//! the inbox. The router assembly mounts the list endpoint behind the
//! session guard.

use crate::{
    context::ServerResources,
    database_plugins::DatabaseProvider,
    errors::{AppError, AppResult},
    models::ContactMessage,
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

/// Contact form submission
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMessageRequest {
    /// Sender name
    #[serde(default)]
    pub name: String,
    /// Sender email address
    #[serde(default)]
    pub email: String,
    /// Subject line
    pub subject: Option<String>,
    /// Kind of project the sender is asking about
    pub project_type: Option<String>,
    /// Stated budget range
    pub budget: Option<String>,
    /// Inquiry body
    #[serde(default)]
    pub details: String,
    /// URL of an attachment uploaded beforehand
    pub attachment_url: Option<String>,
}

/// Contact message route handlers
pub struct MessageRoutes;

impl MessageRoutes {
    /// Accept a contact form submission
    pub async fn handle_create_message(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<CreateMessageRequest>,
    ) -> AppResult<Response> {
        if request.name.trim().is_empty()
            || request.email.trim().is_empty()
            || request.details.trim().is_empty()
        {
            return Err(AppError::invalid_input(
                "Name, email and details are required",
            ));
        }

        let message = ContactMessage::new(
            request.name,
            request.email,
            request.subject,
            request.project_type,
            request.budget,
            request.details,
            request.attachment_url,
        );

        resources
            .database
            .create_message(&message)
            .await
            .map_err(|e| AppError::database(format!("Message creation failed: {e}")))?;

        info!("Contact message received from {}", message.email);

        Ok((StatusCode::CREATED, Json(message)).into_response())
    }

    /// List all contact messages, newest first
    pub async fn handle_list_messages(
        State(resources): State<Arc<ServerResources>>,
    ) -> AppResult<Response> {
        let messages = resources
            .database
            .list_messages()
            .await
            .map_err(|e| AppError::database(format!("Message listing failed: {e}")))?;

        Ok(Json(messages).into_response())
    }
}
