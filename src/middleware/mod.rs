// ABOUTME: HTTP middleware for request identification, CORS, and admin authentication
// ABOUTME: Provides request ID generation and the session token guard for privileged routes

pub mod auth;
pub mod cors;
pub mod request_id;

// Admin session guard
pub use auth::{admin_auth_middleware, AdminIdentity};

// CORS configuration
pub use cors::setup_cors;

// Request correlation
pub use request_id::{request_id_middleware, RequestId};
