// ABOUTME: Contact message database operations
// ABOUTME: Handles hire-me inquiry storage and admin-facing listing

use super::Database;
use crate::models::ContactMessage;
use anyhow::Result;
use sqlx::Row;

impl Database {
    /// Create the contact_messages table
    ///
    /// # Errors
    ///
    /// Returns an error if the table or index creation fails
    pub(super) async fn migrate_messages(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS contact_messages (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                subject TEXT,
                project_type TEXT,
                budget TEXT,
                details TEXT NOT NULL,
                attachment_url TEXT,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_messages_created_at ON contact_messages(created_at)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Insert a contact message
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn create_message(&self, message: &ContactMessage) -> Result<()> {
        sqlx::query(
            r"
            INSERT INTO contact_messages (
                id, name, email, subject, project_type, budget, details, attachment_url, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(&message.id)
        .bind(&message.name)
        .bind(&message.email)
        .bind(&message.subject)
        .bind(&message.project_type)
        .bind(&message.budget)
        .bind(&message.details)
        .bind(&message.attachment_url)
        .bind(message.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// List all contact messages, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn list_messages(&self) -> Result<Vec<ContactMessage>> {
        let rows = sqlx::query(
            r"
            SELECT id, name, email, subject, project_type, budget, details, attachment_url, created_at
            FROM contact_messages ORDER BY created_at DESC
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_message).collect()
    }

    /// Convert a database row to a ContactMessage struct
    fn row_to_message(row: &sqlx::sqlite::SqliteRow) -> Result<ContactMessage> {
        Ok(ContactMessage {
            id: row.get("id"),
            name: row.get("name"),
            email: row.get("email"),
            subject: row.get("subject"),
            project_type: row.get("project_type"),
            budget: row.get("budget"),
            details: row.get("details"),
            attachment_url: row.get("attachment_url"),
            created_at: row.get("created_at"),
        })
    }
}
