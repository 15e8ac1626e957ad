// ABOUTME: Core data models for the Folio portfolio API
// ABOUTME: Defines Admin, Project, Skill and ContactMessage data structures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Data Models
//!
//! This module contains the core data structures used throughout the Folio API.
//! All models serialize to the JSON shapes the portfolio frontend consumes:
//! camelCase keys, optional fields omitted when absent, and the admin password
//! hash never leaving the process.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

/// Administrator account. The store enforces username uniqueness; in practice
/// a deployment holds exactly one row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Admin {
    /// Unique identifier (UUID v4, stored as text)
    pub id: String,
    /// Login name
    pub username: String,
    /// Bcrypt hash of the password. Never serialized to the wire.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Record creation time
    pub created_at: DateTime<Utc>,
}

impl Admin {
    /// Create a new admin with a generated ID and current timestamp
    #[must_use]
    pub fn new(username: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            username,
            password_hash,
            created_at: Utc::now(),
        }
    }
}

/// Portfolio project entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique identifier (UUID v4, stored as text)
    pub id: String,
    /// Project title
    pub title: String,
    /// Project description
    pub description: String,
    /// Cover image URL
    pub image: String,
    /// Link to the deployed project, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_link: Option<String>,
    /// Link to the source repository, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_link: Option<String>,
    /// Technology tags shown on the project card
    #[serde(default)]
    pub tags: Vec<String>,
    /// Record creation time
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Create a new project with a generated ID and current timestamp
    #[must_use]
    pub fn new(
        title: String,
        description: String,
        image: String,
        live_link: Option<String>,
        github_link: Option<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            description,
            image,
            live_link,
            github_link,
            tags,
            created_at: Utc::now(),
        }
    }
}

/// Skill category taxonomy used by the portfolio frontend. Wire values are
/// capitalized and must stay that way; the frontend filters on them verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillCategory {
    /// Frontend technologies (frameworks, styling)
    Frontend,
    /// Backend technologies (servers, APIs)
    Backend,
    /// Mobile development
    Mobile,
    /// Databases and storage
    Database,
    /// Tooling and infrastructure
    Tools,
}

impl Display for SkillCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Mobile => "Mobile",
            Self::Database => "Database",
            Self::Tools => "Tools",
        };
        write!(f, "{name}")
    }
}

impl FromStr for SkillCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Frontend" => Ok(Self::Frontend),
            "Backend" => Ok(Self::Backend),
            "Mobile" => Ok(Self::Mobile),
            "Database" => Ok(Self::Database),
            "Tools" => Ok(Self::Tools),
            other => Err(AppError::invalid_input(format!(
                "Unknown skill category: {other}"
            ))),
        }
    }
}

/// A single skill entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    /// Unique identifier (UUID v4, stored as text)
    pub id: String,
    /// Skill name (e.g. "React", "PostgreSQL")
    pub name: String,
    /// Category the frontend groups this skill under
    pub category: SkillCategory,
    /// Icon identifier: a lucide icon name or an image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Skill {
    /// Create a new skill with a generated ID
    #[must_use]
    pub fn new(name: String, category: SkillCategory, icon: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            category,
            icon,
        }
    }
}

/// Inbound hire-me inquiry submitted through the public contact form
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    /// Unique identifier (UUID v4, stored as text)
    pub id: String,
    /// Sender name
    pub name: String,
    /// Sender email address
    pub email: String,
    /// Subject line composed by the frontend
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Kind of work being inquired about
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
    /// Stated budget range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    /// Free-form inquiry body
    pub details: String,
    /// URL of an uploaded attachment, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_url: Option<String>,
    /// Submission time
    pub created_at: DateTime<Utc>,
}

impl ContactMessage {
    /// Create a new message with a generated ID and current timestamp
    #[must_use]
    pub fn new(
        name: String,
        email: String,
        subject: Option<String>,
        project_type: Option<String>,
        budget: Option<String>,
        details: String,
        attachment_url: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            subject,
            project_type,
            budget,
            details,
            attachment_url,
            created_at: Utc::now(),
        }
    }
}
