// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Handles environment variables, deployment modes, and runtime validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
//! Configuration module for the Folio API
//!
//! This module provides centralized configuration management for all components
//! of the server:
//!
//! - **Environment**: Server configuration from environment variables
//! - **Validation**: Sanity checks applied before the server starts

/// Environment and server configuration
pub mod environment;

// Re-export main configuration types from environment
pub use environment::{DatabaseUrl, Environment, LogLevel, ServerConfig};
