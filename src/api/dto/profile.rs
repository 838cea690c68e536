//! DTOs for the profile admin endpoint.
//!
//! Profile updates arrive as multipart: a `payload` part carrying this JSON
//! body plus optional `avatar` and `cover` file parts.

use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::ProfileDraft;

/// The `payload` part of a profile update request.
#[derive(Debug, Deserialize, Validate)]
pub struct ProfilePayload {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description must not be empty"))]
    pub description: String,

    #[validate(length(min = 1, message = "Bio must not be empty"))]
    pub bio: String,

    pub avatar_url: Option<String>,
    pub cover_image: Option<String>,
    pub location: Option<String>,

    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,

    pub phone: Option<String>,

    #[validate(url(message = "Invalid URL format"))]
    pub linkedin_url: Option<String>,

    #[validate(url(message = "Invalid URL format"))]
    pub github_url: Option<String>,

    #[validate(url(message = "Invalid URL format"))]
    pub resume_url: Option<String>,
}

impl ProfilePayload {
    pub fn into_draft(self) -> ProfileDraft {
        ProfileDraft {
            name: self.name,
            title: self.title,
            description: self.description,
            bio: self.bio,
            avatar_url: self.avatar_url,
            cover_image: self.cover_image,
            location: self.location,
            email: self.email,
            phone: self.phone,
            linkedin_url: self.linkedin_url,
            github_url: self.github_url,
            resume_url: self.resume_url,
        }
    }
}
