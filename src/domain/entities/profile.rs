//! Profile entity — the single "about me" record.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// The site owner's profile. Exactly one row exists; it is updated
/// whole-record and never reordered.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub title: String,
    pub description: String,
    pub bio: String,
    pub avatar_url: Option<String>,
    pub cover_image: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub resume_url: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for updating the profile.
///
/// `avatar_url` / `cover_image` carry either the previously stored URL or
/// the URL of a freshly uploaded file; the application layer resolves
/// pending uploads before the store is called.
#[derive(Debug, Clone)]
pub struct ProfileDraft {
    pub name: String,
    pub title: String,
    pub description: String,
    pub bio: String,
    pub avatar_url: Option<String>,
    pub cover_image: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub resume_url: Option<String>,
}
