// ABOUTME: HTTP server binary for the Folio portfolio API
// ABOUTME: Production entrypoint wiring config, database, storage, and the router together
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Folio API Server Binary
//!
//! This binary starts the portfolio backend with the admin identity gate,
//! content endpoints, and media uploads.

use anyhow::Result;
use clap::Parser;
use folio_api::{
    auth::AuthManager,
    config::environment::ServerConfig,
    context::ServerResources,
    database_plugins::factory::Database,
    logging, routes,
    storage::{LocalMediaStorage, MediaStorage},
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "folio-server")]
#[command(about = "Folio API - Portfolio backend with a single-admin identity gate")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Handle container environments where clap may not work properly
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Argument parsing failed: {e}");
            eprintln!("Using default configuration for production mode");
            Args { http_port: None }
        }
    };

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;

    // Override port if specified
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    // Initialize production logging
    logging::init_from_env()?;

    info!("Starting Folio API - Production Mode");
    info!("{}", config.summary());

    // Initialize database and run migrations
    let database = Database::new(&config.database.url.to_connection_string()).await?;
    info!(
        "Database initialized successfully: {}",
        database.backend_info()
    );

    // Initialize media storage, creating the upload directory if needed
    let storage: Arc<dyn MediaStorage> =
        Arc::new(LocalMediaStorage::new(config.uploads.directory.clone()).await?);
    info!(
        "Media storage ready at {}",
        config.uploads.directory.display()
    );

    // Initialize authentication manager
    let auth_manager = AuthManager::new(
        config.jwt_secret_bytes().to_vec(),
        config.auth.token_expiry_hours,
    );
    info!("Authentication manager initialized");

    if !config.is_setup_gated() {
        info!("Setup endpoint is open until the first admin is created (set SETUP_SECRET to gate it)");
    }

    // Create server resources and the application router
    let resources = Arc::new(ServerResources::new(
        database,
        auth_manager,
        storage,
        Arc::new(config.clone()),
    ));
    let app = routes::router(resources);

    display_available_endpoints(&config);

    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("HTTP server listening on http://{addr}");

    if let Err(e) = axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {e}");
        return Err(e.into());
    }

    info!("Server shutdown complete");
    Ok(())
}

/// Display all available API endpoints with their ports
fn display_available_endpoints(config: &ServerConfig) {
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = config.http_port;

    info!("=== Available API Endpoints ===");
    display_auth_endpoints(&host, port);
    display_content_endpoints(&host, port);
    display_upload_endpoints(&host, port);
    display_monitoring_endpoints(&host, port);
    info!("=== End of Endpoint List ===");
}

#[allow(clippy::cognitive_complexity)]
fn display_auth_endpoints(host: &str, port: u16) {
    info!("Authentication:");
    info!("   Admin Login:       POST http://{host}:{port}/api/auth/login");
    info!("   Admin Setup:       POST http://{host}:{port}/api/auth/setup");
}

#[allow(clippy::cognitive_complexity)]
fn display_content_endpoints(host: &str, port: u16) {
    info!("Portfolio Content:");
    info!("   List Projects:     GET  http://{host}:{port}/api/projects");
    info!("   Create Project:    POST http://{host}:{port}/api/projects");
    info!("   Delete Project:    DELETE http://{host}:{port}/api/projects/{{id}}");
    info!("   List Skills:       GET  http://{host}:{port}/api/skills");
    info!("   Create Skill:      POST http://{host}:{port}/api/skills");
    info!("   Submit Message:    POST http://{host}:{port}/api/messages");
    info!("   List Messages:     GET  http://{host}:{port}/api/messages");
}

#[allow(clippy::cognitive_complexity)]
fn display_upload_endpoints(host: &str, port: u16) {
    info!("Media Uploads:");
    info!("   Upload File:       POST http://{host}:{port}/api/upload");
    info!("   Serve File:        GET  http://{host}:{port}/uploads/{{filename}}");
}

#[allow(clippy::cognitive_complexity)]
fn display_monitoring_endpoints(host: &str, port: u16) {
    info!("Monitoring:");
    info!("   API Banner:        GET  http://{host}:{port}/");
    info!("   Health Check:      GET  http://{host}:{port}/health");
}

/// Wait for Ctrl+C or SIGTERM so in-flight requests can finish
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Ctrl+C received, starting graceful shutdown");
        },
        () = terminate => {
            info!("SIGTERM received, starting graceful shutdown");
        },
    }
}
