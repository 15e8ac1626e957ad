// ABOUTME: Skill database operations
// ABOUTME: Handles skill storage and listing grouped by category

use super::Database;
use crate::models::{Skill, SkillCategory};
use anyhow::Result;
use sqlx::Row;

impl Database {
    /// Create the skills table
    ///
    /// # Errors
    ///
    /// Returns an error if the table creation fails
    pub(super) async fn migrate_skills(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS skills (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                category TEXT NOT NULL CHECK (category IN ('Frontend', 'Backend', 'Mobile', 'Database', 'Tools')),
                icon TEXT
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Insert a skill
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn create_skill(&self, skill: &Skill) -> Result<()> {
        sqlx::query(
            r"
            INSERT INTO skills (id, name, category, icon)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(&skill.id)
        .bind(&skill.name)
        .bind(skill.category.to_string())
        .bind(&skill.icon)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// List all skills
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or a stored category is
    /// outside the known taxonomy
    pub async fn list_skills(&self) -> Result<Vec<Skill>> {
        let rows = sqlx::query("SELECT id, name, category, icon FROM skills ORDER BY name")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_skill).collect()
    }

    /// Convert a database row to a Skill struct
    fn row_to_skill(row: &sqlx::sqlite::SqliteRow) -> Result<Skill> {
        let category: String = row.get("category");

        Ok(Skill {
            id: row.get("id"),
            name: row.get("name"),
            category: category
                .parse::<SkillCategory>()
                .map_err(|e| anyhow::anyhow!("{e}"))?,
            icon: row.get("icon"),
        })
    }
}
