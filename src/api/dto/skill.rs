//! DTOs for the skills admin endpoints.

use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::SkillDraft;

/// Request body for creating or replacing a skill.
#[derive(Debug, Deserialize, Validate)]
pub struct SkillPayload {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    /// Proficiency from 0 to 100.
    #[validate(range(min = 0, max = 100, message = "Level must be between 0 and 100"))]
    pub level: i32,

    pub icon: Option<String>,
}

impl SkillPayload {
    pub fn into_draft(self) -> SkillDraft {
        SkillDraft {
            name: self.name,
            level: self.level,
            icon: self.icon,
        }
    }
}
