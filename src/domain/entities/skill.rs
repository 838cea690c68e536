//! Skill entity shown in the public skill list.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::collection::Orderable;

/// A skill with a proficiency level and an icon name.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Skill {
    pub id: String,
    pub name: String,
    /// Proficiency, 0–100.
    pub level: i32,
    pub icon: Option<String>,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Orderable for Skill {
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

/// Input data for creating or updating a skill.
#[derive(Debug, Clone)]
pub struct SkillDraft {
    pub name: String,
    pub level: i32,
    pub icon: Option<String>,
}

impl crate::domain::repositories::UploadTarget for SkillDraft {
    // Skills carry no image; the admin API never sends a file with them.
    fn attach_upload(&mut self, _url: String) {}
}
