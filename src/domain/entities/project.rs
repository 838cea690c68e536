//! Project entity shown in the public project gallery.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::collection::Orderable;
use crate::domain::repositories::UploadTarget;

/// A portfolio project with an image and optional demo/source links.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Public URL of the project image.
    pub image: String,
    pub technologies: Vec<String>,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Orderable for Project {
    fn id(&self) -> &str {
        &self.id
    }
    fn display_order(&self) -> i32 {
        self.display_order
    }
    fn set_display_order(&mut self, order: i32) {
        self.display_order = order;
    }
}

/// Input data for creating or updating a project.
///
/// `image` may be empty when a pending upload will supply it; the
/// application layer fills it in with the uploaded file URL before the
/// store is called.
#[derive(Debug, Clone)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub image: String,
    pub technologies: Vec<String>,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
}

impl UploadTarget for ProjectDraft {
    fn attach_upload(&mut self, url: String) {
        self.image = url;
    }
}
