// ABOUTME: Admin credential database operations
// ABOUTME: Handles admin bootstrap, credential lookup, and password resets

use super::Database;
use crate::models::Admin;
use anyhow::Result;
use sqlx::Row;

impl Database {
    /// Create the admins table
    ///
    /// # Errors
    ///
    /// Returns an error if the table or index creation fails
    pub(super) async fn migrate_admins(&self) -> Result<()> {
        // The UNIQUE constraint on username is what makes concurrent setup
        // requests safe: at most one insert can win.
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS admins (
                id TEXT PRIMARY KEY,
                username TEXT UNIQUE NOT NULL,
                password_hash TEXT NOT NULL,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_admins_username ON admins(username)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Insert an admin record unless the username is already taken.
    ///
    /// Returns `Ok(None)` when another record holds the username. Losing the
    /// race to a concurrent insert surfaces the same way as an ordinary
    /// duplicate, so callers only handle one outcome.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn create_admin(&self, admin: &Admin) -> Result<Option<Admin>> {
        let result = sqlx::query(
            r"
            INSERT INTO admins (id, username, password_hash, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT(username) DO NOTHING
            ",
        )
        .bind(&admin.id)
        .bind(&admin.username)
        .bind(&admin.password_hash)
        .bind(admin.created_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        Ok(Some(admin.clone()))
    }

    /// Get an admin by record ID
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_admin_by_id(&self, admin_id: &str) -> Result<Option<Admin>> {
        let row =
            sqlx::query("SELECT id, username, password_hash, created_at FROM admins WHERE id = $1")
                .bind(admin_id)
                .fetch_optional(&self.pool)
                .await?;

        row.as_ref().map(Self::row_to_admin).transpose()
    }

    /// Get an admin by username
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_admin_by_username(&self, username: &str) -> Result<Option<Admin>> {
        let row = sqlx::query(
            "SELECT id, username, password_hash, created_at FROM admins WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::row_to_admin).transpose()
    }

    /// Set a new password hash on every admin record matching the username.
    /// Returns the number of records updated; `0` means no such admin exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn update_admin_password(&self, username: &str, password_hash: &str) -> Result<u64> {
        let result = sqlx::query("UPDATE admins SET password_hash = $2 WHERE username = $1")
            .bind(username)
            .bind(password_hash)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// List all admin records, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn list_admins(&self) -> Result<Vec<Admin>> {
        let rows = sqlx::query(
            "SELECT id, username, password_hash, created_at FROM admins ORDER BY created_at",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_admin).collect()
    }

    /// Get total admin count
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn count_admins(&self) -> Result<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM admins")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Convert a database row to an Admin struct
    fn row_to_admin(row: &sqlx::sqlite::SqliteRow) -> Result<Admin> {
        Ok(Admin {
            id: row.get("id"),
            username: row.get("username"),
            password_hash: row.get("password_hash"),
            created_at: row.get("created_at"),
        })
    }
}
