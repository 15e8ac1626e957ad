// ABOUTME: Main library entry point for the Folio portfolio API
// ABOUTME: Provides the REST backend powering the portfolio site and its admin dashboard
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Folio API
//!
//! Backend for a personal portfolio site: public project, skill, and
//! contact-form endpoints plus a single-admin identity gate protecting
//! everything that mutates content.
//!
//! ## Features
//!
//! - **Admin identity gate**: bcrypt credential store with HS256 session
//!   tokens and a one-time gated bootstrap endpoint
//! - **Portfolio content**: projects, skills, and contact messages over a
//!   pluggable `SQLite` store
//! - **Media uploads**: multipart uploads stored on disk and served back
//!   by name
//!
//! ## Quick Start
//!
//! 1. Generate a signing secret with `folio-cli generate-secret`
//! 2. Export `JWT_SECRET` and start `folio-server`
//! 3. Create the admin with `POST /api/auth/setup`, then log in
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use folio_api::config::environment::ServerConfig;
//! use folio_api::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     // Load configuration
//!     let config = ServerConfig::from_env()?;
//!
//!     println!("Folio API configured with port: HTTP={}", config.http_port);
//!
//!     Ok(())
//! }
//! ```

// ── Public API ──────────────────────────────────────────────────────────
// These modules are used by binary crates (src/bin/) and integration tests
// (tests/). They must remain `pub` so external consumers can access them.

/// Authentication and session management
pub mod auth;

/// Configuration management and persistence
pub mod config;

/// Application constants and configuration values
pub mod constants;

/// Shared resource container for dependency injection
pub mod context;

/// `SQLite` database management
pub mod database;

/// Database abstraction layer with plugin support
pub mod database_plugins;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Production logging and structured output
pub mod logging;

/// HTTP middleware for request correlation, CORS, and the admin guard
pub mod middleware;

/// Common data models for portfolio content
pub mod models;

/// HTTP routes for the portfolio API
pub mod routes;

/// Media storage for uploaded files
pub mod storage;
