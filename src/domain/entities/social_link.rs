//! Social link entity shown alongside the profile.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::collection::Orderable;

/// A link to an external profile (GitHub, LinkedIn, etc.).
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct SocialLink {
    pub id: String,
    pub platform: String,
    pub url: String,
    pub icon: Option<String>,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Orderable for SocialLink {
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

/// Input data for creating or updating a social link.
#[derive(Debug, Clone)]
pub struct SocialLinkDraft {
    pub platform: String,
    pub url: String,
    pub icon: Option<String>,
}

impl crate::domain::repositories::UploadTarget for SocialLinkDraft {
    // Social links carry no image; the admin API never sends a file with them.
    fn attach_upload(&mut self, _url: String) {}
}
