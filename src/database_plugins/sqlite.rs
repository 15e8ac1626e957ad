//! SQLite database implementation
//!
//! This module wraps the SQLite database functionality to implement the
//! `DatabaseProvider` trait.

use super::DatabaseProvider;
use crate::models::{Admin, ContactMessage, Project, Skill};
use anyhow::Result;
use async_trait::async_trait;

/// SQLite database implementation
#[derive(Clone)]
pub struct SqliteDatabase {
    /// The underlying database instance
    inner: crate::database::Database,
}

impl SqliteDatabase {
    /// Get a reference to the inner database for pool-level operations
    pub const fn inner(&self) -> &crate::database::Database {
        &self.inner
    }
}

#[async_trait]
impl DatabaseProvider for SqliteDatabase {
    async fn new(database_url: &str) -> Result<Self> {
        let inner = crate::database::Database::new(database_url).await?;
        Ok(Self { inner })
    }

    async fn migrate(&self) -> Result<()> {
        self.inner.migrate().await
    }

    async fn create_admin(&self, admin: &Admin) -> Result<Option<Admin>> {
        self.inner.create_admin(admin).await
    }

    async fn get_admin_by_id(&self, admin_id: &str) -> Result<Option<Admin>> {
        self.inner.get_admin_by_id(admin_id).await
    }

    async fn get_admin_by_username(&self, username: &str) -> Result<Option<Admin>> {
        self.inner.get_admin_by_username(username).await
    }

    async fn update_admin_password(&self, username: &str, password_hash: &str) -> Result<u64> {
        self.inner
            .update_admin_password(username, password_hash)
            .await
    }

    async fn list_admins(&self) -> Result<Vec<Admin>> {
        self.inner.list_admins().await
    }

    async fn count_admins(&self) -> Result<i64> {
        self.inner.count_admins().await
    }

    async fn create_project(&self, project: &Project) -> Result<()> {
        self.inner.create_project(project).await
    }

    async fn list_projects(&self) -> Result<Vec<Project>> {
        self.inner.list_projects().await
    }

    async fn delete_project(&self, project_id: &str) -> Result<u64> {
        self.inner.delete_project(project_id).await
    }

    async fn create_skill(&self, skill: &Skill) -> Result<()> {
        self.inner.create_skill(skill).await
    }

    async fn list_skills(&self) -> Result<Vec<Skill>> {
        self.inner.list_skills().await
    }

    async fn create_message(&self, message: &ContactMessage) -> Result<()> {
        self.inner.create_message(message).await
    }

    async fn list_messages(&self) -> Result<Vec<ContactMessage>> {
        self.inner.list_messages().await
    }
}
