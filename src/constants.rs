// ABOUTME: System-wide constants and configuration defaults for the Folio API
// ABOUTME: Contains auth parameters, size limits, default ports, and wire-level message strings
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Constants Module
//!
//! Application constants grouped by concern. Values that operators commonly
//! override live in [`crate::config::environment`]; what lives here is fixed
//! by the API contract or by security policy.

/// Authentication and credential parameters
pub mod auth {
    /// Bcrypt cost factor for admin password hashes.
    ///
    /// Deliberately pinned to 10 rather than `bcrypt::DEFAULT_COST` (12):
    /// existing deployments carry cost-10 hashes and verification must keep
    /// accepting them, so new hashes use the same work factor.
    pub const BCRYPT_COST: u32 = 10;

    /// Default session token lifetime in hours
    pub const DEFAULT_TOKEN_EXPIRY_HOURS: i64 = 1;

    /// Minimum accepted length for the JWT signing secret
    pub const JWT_SECRET_MIN_LENGTH: usize = 16;

    /// Length of secrets produced by `generate_jwt_secret`
    pub const GENERATED_SECRET_LENGTH: usize = 64;

    /// Header carrying the session token for legacy clients
    pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

    /// Header carrying the out-of-band secret for the setup endpoint
    pub const SETUP_SECRET_HEADER: &str = "x-setup-secret";
}

/// Request and payload size limits
pub mod limits {
    /// Maximum accepted upload size in bytes (5 MiB, matching the
    /// documented contract of `POST /api/upload`)
    pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

    /// Slack added to the raw body cap so a full-size file plus multipart
    /// framing still fits
    pub const MULTIPART_OVERHEAD_BYTES: usize = 16 * 1024;

    /// Per-request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}

/// Network defaults
pub mod ports {
    /// Default HTTP port (the historical deployment default)
    pub const DEFAULT_HTTP_PORT: u16 = 5000;
}

/// Filesystem and connection-string defaults
pub mod defaults {
    /// Default SQLite database location
    pub const DEFAULT_DATABASE_URL: &str = "sqlite:./data/folio.db";

    /// Default directory for stored uploads
    pub const DEFAULT_UPLOAD_DIR: &str = "./data/uploads";

    /// Default CORS policy (permissive; production sets an explicit list)
    pub const DEFAULT_CORS_ORIGINS: &str = "*";
}

/// Service identity
pub mod service {
    /// Service name used in logs and the health endpoint
    pub const SERVICE_NAME: &str = "folio-api";

    /// Server version from Cargo.toml
    pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
}

/// Messages that are part of the HTTP contract. Clients match on these
/// strings, so they change only with the API version.
pub mod messages {
    /// Body of every failed login, regardless of which check failed
    pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

    /// Setup refused because an admin record is already present
    pub const ADMIN_EXISTS: &str = "Admin already exists";

    /// Successful setup
    pub const ADMIN_CREATED: &str = "Admin created successfully";

    /// Successful project deletion
    pub const PROJECT_DELETED: &str = "Project deleted";

    /// Upload request without a `file` part
    pub const NO_FILE_UPLOADED: &str = "No file uploaded";

    /// Successful upload
    pub const FILE_UPLOADED: &str = "File uploaded successfully";
}

/// Time conversion constants
pub mod time_constants {
    /// Seconds per hour
    pub const SECONDS_PER_HOUR: u32 = 3600;
}
