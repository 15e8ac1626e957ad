// ABOUTME: Centralized resource container for dependency injection across HTTP handlers
// ABOUTME: Holds the shared database, auth manager, media storage, and configuration
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use crate::auth::AuthManager;
use crate::config::environment::ServerConfig;
use crate::database_plugins::factory::Database;
use crate::storage::MediaStorage;
use std::sync::Arc;

/// Centralized resource container shared by every route handler
///
/// Holds the expensive long-lived objects exactly once so handlers and
/// middleware share them through a single `Arc` instead of each recreating
/// connections or re-reading configuration.
#[derive(Clone)]
pub struct ServerResources {
    pub database: Arc<Database>,
    pub auth_manager: Arc<AuthManager>,
    pub storage: Arc<dyn MediaStorage>,
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Create new server resources with proper Arc sharing
    pub fn new(
        database: Database,
        auth_manager: AuthManager,
        storage: Arc<dyn MediaStorage>,
        config: Arc<ServerConfig>,
    ) -> Self {
        Self {
            database: Arc::new(database),
            auth_manager: Arc::new(auth_manager),
            storage,
            config,
        }
    }
}
