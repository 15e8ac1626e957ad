// ABOUTME: HTTP integration tests for portfolio content routes
// ABOUTME: Covers projects, skills, and contact messages including guard placement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::uninlined_format_args)]

//! HTTP integration tests for portfolio content routes
//!
//! Validates the public read endpoints, the admin-only write endpoints,
//! and the visitor-facing contact form.

mod common;
mod helpers;

use chrono::{Duration, Utc};
use folio_api::{
    context::ServerResources, database_plugins::DatabaseProvider, models::Project,
};
use helpers::axum_test::AxumTestRequest;
use serde_json::json;
use std::sync::Arc;
use tempfile::TempDir;

struct ContentTestSetup {
    resources: Arc<ServerResources>,
    token: String,
    _temp_dir: TempDir,
}

impl ContentTestSetup {
    async fn new() -> anyhow::Result<Self> {
        let (resources, temp_dir) = common::create_test_resources().await?;
        let admin = common::create_test_admin(&resources.database, "admin", "admin123").await?;
        let token = resources.auth_manager.generate_token(&admin)?;
        Ok(Self {
            resources,
            token,
            _temp_dir: temp_dir,
        })
    }

    fn app(&self) -> axum::Router {
        folio_api::routes::router(self.resources.clone())
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

// ============================================================================
// Projects
// ============================================================================

#[tokio::test]
async fn test_list_projects_starts_empty() {
    let setup = ContentTestSetup::new().await.expect("Setup failed");

    let response = AxumTestRequest::get("/api/projects").send(setup.app()).await;

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body.as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn test_create_project_returns_full_record() {
    let setup = ContentTestSetup::new().await.expect("Setup failed");

    let response = AxumTestRequest::post("/api/projects")
        .header("authorization", &setup.bearer())
        .json(&json!({
            "title": "Folio",
            "description": "Portfolio website",
            "image": "cover.png",
            "liveLink": "https://folio.example.com",
            "githubLink": "https://github.com/example/folio",
            "tags": ["rust", "axum"]
        }))
        .send(setup.app())
        .await;

    assert_eq!(response.status(), 201);
    let body: serde_json::Value = response.json();
    assert!(body["id"].is_string());
    assert_eq!(body["title"], "Folio");
    assert_eq!(body["liveLink"], "https://folio.example.com");
    assert_eq!(body["githubLink"], "https://github.com/example/folio");
    assert_eq!(body["tags"], json!(["rust", "axum"]));
    assert!(body["createdAt"].is_string());
}

#[tokio::test]
async fn test_create_project_omits_absent_links() {
    let setup = ContentTestSetup::new().await.expect("Setup failed");

    let response = AxumTestRequest::post("/api/projects")
        .header("authorization", &setup.bearer())
        .json(&json!({"title": "Folio", "description": "d", "image": "i.png"}))
        .send(setup.app())
        .await;

    assert_eq!(response.status(), 201);
    let body: serde_json::Value = response.json();
    assert!(body.get("liveLink").is_none());
    assert!(body.get("githubLink").is_none());
    assert_eq!(body["tags"], json!([]));
}

#[tokio::test]
async fn test_create_project_requires_title_description_image() {
    let setup = ContentTestSetup::new().await.expect("Setup failed");

    let response = AxumTestRequest::post("/api/projects")
        .header("authorization", &setup.bearer())
        .json(&json!({"title": "  ", "description": "d", "image": "i.png"}))
        .send(setup.app())
        .await;

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Title, description and image are required");
}

#[tokio::test]
async fn test_projects_listed_newest_first() {
    let setup = ContentTestSetup::new().await.expect("Setup failed");

    // Insert directly with controlled timestamps so the ordering is unambiguous
    let mut older = Project::new(
        "Older".to_owned(),
        "first project".to_owned(),
        "a.png".to_owned(),
        None,
        None,
        vec![],
    );
    older.created_at = Utc::now() - Duration::hours(2);
    let newer = Project::new(
        "Newer".to_owned(),
        "second project".to_owned(),
        "b.png".to_owned(),
        None,
        None,
        vec![],
    );
    setup
        .resources
        .database
        .create_project(&older)
        .await
        .expect("insert failed");
    setup
        .resources
        .database
        .create_project(&newer)
        .await
        .expect("insert failed");

    let response = AxumTestRequest::get("/api/projects").send(setup.app()).await;
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json();
    let titles: Vec<&str> = body
        .as_array()
        .expect("expected array")
        .iter()
        .map(|p| p["title"].as_str().expect("title missing"))
        .collect();
    assert_eq!(titles, vec!["Newer", "Older"]);
}

#[tokio::test]
async fn test_delete_missing_project_answers_404() {
    let setup = ContentTestSetup::new().await.expect("Setup failed");

    let response = AxumTestRequest::delete("/api/projects/no-such-id")
        .header("authorization", &setup.bearer())
        .send(setup.app())
        .await;

    assert_eq!(response.status(), 404);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Project not found");
}

#[tokio::test]
async fn test_project_writes_require_token() {
    let setup = ContentTestSetup::new().await.expect("Setup failed");

    let create = AxumTestRequest::post("/api/projects")
        .json(&json!({"title": "t", "description": "d", "image": "i.png"}))
        .send(setup.app())
        .await;
    assert_eq!(create.status(), 401);

    let delete = AxumTestRequest::delete("/api/projects/some-id")
        .send(setup.app())
        .await;
    assert_eq!(delete.status(), 401);
}

// ============================================================================
// Skills
// ============================================================================

#[tokio::test]
async fn test_create_and_list_skills() {
    let setup = ContentTestSetup::new().await.expect("Setup failed");

    let response = AxumTestRequest::post("/api/skills")
        .header("authorization", &setup.bearer())
        .json(&json!({"name": "React", "category": "Frontend", "icon": "atom"}))
        .send(setup.app())
        .await;
    assert_eq!(response.status(), 201);
    let created: serde_json::Value = response.json();
    assert_eq!(created["name"], "React");
    assert_eq!(created["category"], "Frontend");
    assert_eq!(created["icon"], "atom");

    // Listing is public
    let response = AxumTestRequest::get("/api/skills").send(setup.app()).await;
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_skills_sorted_by_name() {
    let setup = ContentTestSetup::new().await.expect("Setup failed");

    for (name, category) in [("Rust", "Backend"), ("Axum", "Backend"), ("Postgres", "Database")] {
        let response = AxumTestRequest::post("/api/skills")
            .header("authorization", &setup.bearer())
            .json(&json!({"name": name, "category": category}))
            .send(setup.app())
            .await;
        assert_eq!(response.status(), 201);
    }

    let response = AxumTestRequest::get("/api/skills").send(setup.app()).await;
    let body: serde_json::Value = response.json();
    let names: Vec<&str> = body
        .as_array()
        .expect("expected array")
        .iter()
        .map(|s| s["name"].as_str().expect("name missing"))
        .collect();
    assert_eq!(names, vec!["Axum", "Postgres", "Rust"]);
}

#[tokio::test]
async fn test_create_skill_requires_name() {
    let setup = ContentTestSetup::new().await.expect("Setup failed");

    let response = AxumTestRequest::post("/api/skills")
        .header("authorization", &setup.bearer())
        .json(&json!({"category": "Frontend"}))
        .send(setup.app())
        .await;

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Skill name is required");
}

#[tokio::test]
async fn test_create_skill_rejects_unknown_category() {
    let setup = ContentTestSetup::new().await.expect("Setup failed");

    let response = AxumTestRequest::post("/api/skills")
        .header("authorization", &setup.bearer())
        .json(&json!({"name": "Cooking", "category": "Hobby"}))
        .send(setup.app())
        .await;

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Unknown skill category: Hobby");
}

#[tokio::test]
async fn test_create_skill_requires_token() {
    let setup = ContentTestSetup::new().await.expect("Setup failed");

    let response = AxumTestRequest::post("/api/skills")
        .json(&json!({"name": "React", "category": "Frontend"}))
        .send(setup.app())
        .await;

    assert_eq!(response.status(), 401);
}

// ============================================================================
// Contact Messages
// ============================================================================

#[tokio::test]
async fn test_submit_message_is_public() {
    let setup = ContentTestSetup::new().await.expect("Setup failed");

    let response = AxumTestRequest::post("/api/messages")
        .json(&json!({
            "name": "Visitor",
            "email": "visitor@example.com",
            "subject": "Project inquiry",
            "projectType": "Web app",
            "budget": "5-10k",
            "details": "I would like a portfolio site."
        }))
        .send(setup.app())
        .await;

    assert_eq!(response.status(), 201);
    let body: serde_json::Value = response.json();
    assert!(body["id"].is_string());
    assert_eq!(body["name"], "Visitor");
    assert_eq!(body["projectType"], "Web app");
}

#[tokio::test]
async fn test_submit_message_requires_name_email_details() {
    let setup = ContentTestSetup::new().await.expect("Setup failed");

    let response = AxumTestRequest::post("/api/messages")
        .json(&json!({"name": "Visitor", "email": "v@example.com"}))
        .send(setup.app())
        .await;

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Name, email and details are required");
}

#[tokio::test]
async fn test_reading_messages_requires_token() {
    let setup = ContentTestSetup::new().await.expect("Setup failed");

    let response = AxumTestRequest::get("/api/messages").send(setup.app()).await;
    assert_eq!(response.status(), 401);

    let response = AxumTestRequest::get("/api/messages")
        .header("authorization", &setup.bearer())
        .send(setup.app())
        .await;
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_messages_listed_newest_first() {
    let setup = ContentTestSetup::new().await.expect("Setup failed");

    for details in ["first inquiry", "second inquiry"] {
        let response = AxumTestRequest::post("/api/messages")
            .json(&json!({
                "name": "Visitor",
                "email": "v@example.com",
                "details": details
            }))
            .send(setup.app())
            .await;
        assert_eq!(response.status(), 201);
        // Distinct insertion timestamps keep the expected order deterministic
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    let response = AxumTestRequest::get("/api/messages")
        .header("authorization", &setup.bearer())
        .send(setup.app())
        .await;
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json();
    let details: Vec<&str> = body
        .as_array()
        .expect("expected array")
        .iter()
        .map(|m| m["details"].as_str().expect("details missing"))
        .collect();
    assert_eq!(details, vec!["second inquiry", "first inquiry"]);
}
