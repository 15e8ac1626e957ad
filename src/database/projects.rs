// ABOUTME: Project database operations
// ABOUTME: Handles portfolio project storage, listing, and deletion

use super::Database;
use crate::models::Project;
use anyhow::Result;
use sqlx::Row;

impl Database {
    /// Create the projects table
    ///
    /// # Errors
    ///
    /// Returns an error if the table or index creation fails
    pub(super) async fn migrate_projects(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS projects (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                description TEXT NOT NULL,
                image TEXT NOT NULL,
                live_link TEXT,
                github_link TEXT,
                tags TEXT NOT NULL DEFAULT '[]',
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_projects_created_at ON projects(created_at)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Insert a project
    ///
    /// # Errors
    ///
    /// Returns an error if tag serialization or the database query fails
    pub async fn create_project(&self, project: &Project) -> Result<()> {
        let tags_json = serde_json::to_string(&project.tags)?;

        sqlx::query(
            r"
            INSERT INTO projects (id, title, description, image, live_link, github_link, tags, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(&project.id)
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.image)
        .bind(&project.live_link)
        .bind(&project.github_link)
        .bind(tags_json)
        .bind(project.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// List all projects, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        let rows = sqlx::query(
            r"
            SELECT id, title, description, image, live_link, github_link, tags, created_at
            FROM projects ORDER BY created_at DESC
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_project).collect()
    }

    /// Delete a project by ID. Returns the number of records removed; `0`
    /// means no such project exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn delete_project(&self, project_id: &str) -> Result<u64> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(project_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Convert a database row to a Project struct
    fn row_to_project(row: &sqlx::sqlite::SqliteRow) -> Result<Project> {
        let tags_json: String = row.get("tags");
        let tags: Vec<String> = serde_json::from_str(&tags_json)?;

        Ok(Project {
            id: row.get("id"),
            title: row.get("title"),
            description: row.get("description"),
            image: row.get("image"),
            live_link: row.get("live_link"),
            github_link: row.get("github_link"),
            tags,
            created_at: row.get("created_at"),
        })
    }
}
