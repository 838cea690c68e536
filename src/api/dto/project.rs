//! DTOs for the projects admin endpoints.
//!
//! Projects arrive as multipart: a `payload` part carrying this JSON body
//! plus an optional `image` file part. When a file is present it overrides
//! whatever `image` URL the payload carries.

use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::ProjectDraft;

/// The `payload` part of a project create/update request.
#[derive(Debug, Deserialize, Validate)]
pub struct ProjectPayload {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description must not be empty"))]
    pub description: String,

    /// Image URL. May be empty when a file part accompanies the request.
    #[serde(default)]
    pub image: String,

    #[serde(default)]
    pub technologies: Vec<String>,

    #[validate(url(message = "Invalid URL format"))]
    pub demo_url: Option<String>,

    #[validate(url(message = "Invalid URL format"))]
    pub github_url: Option<String>,
}

impl ProjectPayload {
    pub fn into_draft(self) -> ProjectDraft {
        ProjectDraft {
            title: self.title,
            description: self.description,
            image: self.image,
            technologies: self.technologies,
            demo_url: self.demo_url,
            github_url: self.github_url,
        }
    }
}
