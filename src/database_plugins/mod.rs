// ABOUTME: Database abstraction layer for the Folio API
// ABOUTME: Plugin architecture for database support with a SQLite backend

use crate::models::{Admin, ContactMessage, Project, Skill};
use anyhow::Result;
use async_trait::async_trait;

pub mod factory;
pub mod sqlite;

/// Core database abstraction trait
///
/// All database implementations must implement this trait to provide
/// a consistent interface for the application layer.
#[async_trait]
pub trait DatabaseProvider: Send + Sync + Clone {
    /// Create a new database connection
    async fn new(database_url: &str) -> Result<Self>
    where
        Self: Sized;

    /// Run database migrations to set up schema
    async fn migrate(&self) -> Result<()>;

    // ================================
    // Admin Credentials
    // ================================

    /// Insert an admin record unless the username is already taken.
    /// Returns `None` when another record holds the username.
    async fn create_admin(&self, admin: &Admin) -> Result<Option<Admin>>;

    /// Get admin by record ID
    async fn get_admin_by_id(&self, admin_id: &str) -> Result<Option<Admin>>;

    /// Get admin by username
    async fn get_admin_by_username(&self, username: &str) -> Result<Option<Admin>>;

    /// Set a new password hash on every record matching the username.
    /// Returns the number of records updated.
    async fn update_admin_password(&self, username: &str, password_hash: &str) -> Result<u64>;

    /// List all admin records
    async fn list_admins(&self) -> Result<Vec<Admin>>;

    /// Get total number of admin records
    async fn count_admins(&self) -> Result<i64>;

    // ================================
    // Projects
    // ================================

    /// Insert a portfolio project
    async fn create_project(&self, project: &Project) -> Result<()>;

    /// List all projects, newest first
    async fn list_projects(&self) -> Result<Vec<Project>>;

    /// Delete a project by ID. Returns the number of records removed.
    async fn delete_project(&self, project_id: &str) -> Result<u64>;

    // ================================
    // Skills
    // ================================

    /// Insert a skill
    async fn create_skill(&self, skill: &Skill) -> Result<()>;

    /// List all skills
    async fn list_skills(&self) -> Result<Vec<Skill>>;

    // ================================
    // Contact Messages
    // ================================

    /// Insert a contact message
    async fn create_message(&self, message: &ContactMessage) -> Result<()>;

    /// List all contact messages, newest first
    async fn list_messages(&self) -> Result<Vec<ContactMessage>>;
}
