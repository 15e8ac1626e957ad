// ABOUTME: Upload route handlers for storing and serving portfolio media
// ABOUTME: Accepts multipart uploads and serves stored files back by name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Upload routes
//!
//! The contact form uploads attachments before submitting, so `POST
//! /api/upload` is public. Files are stored flat under the configured
//! upload directory and served back from `/uploads/:filename`.

use crate::{
    constants::{limits, messages},
    context::ServerResources,
    errors::{AppError, AppResult},
    storage,
};
use axum::{
    extract::{Multipart, Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// Successful upload response
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// Human-readable confirmation
    pub message: String,
    /// URL the stored file is served from
    pub url: String,
    /// Stored file name, usable as a stable reference
    pub filename: String,
}

/// Upload route handlers
pub struct UploadRoutes;

impl UploadRoutes {
    /// Accept a multipart upload in the `file` field
    pub async fn handle_upload(
        State(resources): State<Arc<ServerResources>>,
        mut multipart: Multipart,
    ) -> AppResult<Response> {
        let mut stored_name: Option<String> = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::invalid_input(format!("Malformed multipart body: {e}")))?
        {
            if field.name() != Some("file") {
                continue;
            }

            let original_name = field.file_name().unwrap_or("file").to_owned();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::invalid_input(format!("Failed to read upload: {e}")))?;

            if data.len() > limits::MAX_UPLOAD_BYTES {
                return Err(AppError::payload_too_large(format!(
                    "File exceeds the {} byte upload limit",
                    limits::MAX_UPLOAD_BYTES
                )));
            }

            let name =
                storage::stored_filename(&original_name, chrono::Utc::now().timestamp_millis());

            resources
                .storage
                .save(&name, data)
                .await
                .map_err(|e| AppError::storage(format!("Failed to store upload: {e}")))?;

            stored_name = Some(name);
            break;
        }

        let Some(filename) = stored_name else {
            return Err(AppError::invalid_input(messages::NO_FILE_UPLOADED));
        };

        let url = Self::public_url(&resources, &filename);

        info!("File uploaded: {filename}");

        Ok(Json(UploadResponse {
            message: messages::FILE_UPLOADED.to_string(),
            url,
            filename,
        })
        .into_response())
    }

    /// Serve a stored file by name
    pub async fn handle_serve_upload(
        State(resources): State<Arc<ServerResources>>,
        Path(filename): Path<String>,
    ) -> AppResult<Response> {
        if !storage::is_safe_filename(&filename) {
            return Err(AppError::invalid_input("Invalid file name"));
        }

        let data = resources
            .storage
            .read(&filename)
            .await
            .map_err(|e| AppError::storage(format!("Failed to read stored file: {e}")))?
            .ok_or_else(|| AppError::not_found("File"))?;

        let content_type = content_type_for(&filename);

        Ok(([(header::CONTENT_TYPE, content_type)], data).into_response())
    }

    /// Build the public URL a stored file is reachable at
    fn public_url(resources: &Arc<ServerResources>, filename: &str) -> String {
        resources.config.uploads.public_base_url.as_ref().map_or_else(
            || format!("/uploads/{filename}"),
            |base| format!("{base}/uploads/{filename}"),
        )
    }
}

/// Content type for a stored file, derived from its extension
fn content_type_for(filename: &str) -> &'static str {
    let extension = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("pdf") => "application/pdf",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}
