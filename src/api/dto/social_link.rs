//! DTOs for the social links admin endpoints.

use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::SocialLinkDraft;

/// Request body for creating or replacing a social link.
#[derive(Debug, Deserialize, Validate)]
pub struct SocialLinkPayload {
    #[validate(length(min = 1, max = 50, message = "Platform must be 1-50 characters"))]
    pub platform: String,

    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    pub icon: Option<String>,
}

impl SocialLinkPayload {
    pub fn into_draft(self) -> SocialLinkDraft {
        SocialLinkDraft {
            platform: self.platform,
            url: self.url,
            icon: self.icon,
        }
    }
}
