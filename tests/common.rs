// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides common database, auth, and server resource creation helpers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::uninlined_format_args
)]
//! Shared test utilities for `folio_api`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use anyhow::Result;
use folio_api::{
    auth::{self, AuthManager},
    config::environment::{
        AppBehaviorConfig, AuthConfig, DatabaseConfig, DatabaseUrl, Environment, LogLevel,
        SecurityConfig, ServerConfig, UploadConfig,
    },
    context::ServerResources,
    database_plugins::{factory::Database, DatabaseProvider},
    models::Admin,
    storage::{LocalMediaStorage, MediaStorage},
};
use std::path::Path;
use std::sync::{Arc, Once};
use tempfile::TempDir;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard test database setup
pub async fn create_test_database() -> Result<Arc<Database>> {
    init_test_logging();
    let database_url = "sqlite::memory:";
    let database = Arc::new(Database::new(database_url).await?);
    Ok(database)
}

/// Create test authentication manager with a one-hour token expiry
pub fn create_test_auth_manager() -> Arc<AuthManager> {
    let jwt_secret = auth::generate_jwt_secret().into_bytes();
    Arc::new(AuthManager::new(jwt_secret, 1))
}

/// Create an admin account with a real bcrypt hash of the given password
pub async fn create_test_admin(
    database: &Database,
    username: &str,
    password: &str,
) -> Result<Admin> {
    let password_hash = auth::hash_password(password)?;
    let admin = Admin::new(username.to_owned(), password_hash);
    database.create_admin(&admin).await?;
    Ok(admin)
}

/// Server configuration for tests, rooted at the given upload directory
pub fn test_server_config(upload_dir: &Path) -> ServerConfig {
    ServerConfig {
        http_port: 8081,
        log_level: LogLevel::Info,
        database: DatabaseConfig {
            url: DatabaseUrl::Memory,
            auto_migrate: true,
        },
        auth: AuthConfig {
            jwt_secret: "a".repeat(64),
            token_expiry_hours: 1,
            setup_secret: None,
        },
        security: SecurityConfig {
            cors_origins: vec!["*".to_string()],
        },
        uploads: UploadConfig {
            directory: upload_dir.to_path_buf(),
            public_base_url: None,
        },
        app_behavior: AppBehaviorConfig {
            environment: Environment::Testing,
            server_name: "folio-api".to_string(),
            server_version: "0.0.0".to_string(),
        },
    }
}

/// Complete server resource setup with an in-memory database and temp storage
///
/// The returned `TempDir` keeps the upload directory alive; hold on to it for
/// the duration of the test.
pub async fn create_test_resources() -> Result<(Arc<ServerResources>, TempDir)> {
    create_test_resources_with(None).await
}

/// Server resource setup with a setup secret gating `/api/auth/setup`
pub async fn create_test_resources_with_setup_secret(
    secret: &str,
) -> Result<(Arc<ServerResources>, TempDir)> {
    create_test_resources_with(Some(secret.to_owned())).await
}

async fn create_test_resources_with(
    setup_secret: Option<String>,
) -> Result<(Arc<ServerResources>, TempDir)> {
    let database = create_test_database().await?;
    let auth_manager = create_test_auth_manager();

    let temp_dir = tempfile::tempdir()?;
    let storage: Arc<dyn MediaStorage> =
        Arc::new(LocalMediaStorage::new(temp_dir.path().to_path_buf()).await?);

    let mut config = test_server_config(temp_dir.path());
    config.auth.setup_secret = setup_secret;

    let resources = Arc::new(ServerResources::new(
        (*database).clone(),
        (*auth_manager).clone(),
        storage,
        Arc::new(config),
    ));

    Ok((resources, temp_dir))
}
