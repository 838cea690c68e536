//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{CollectionService, ProfileService, SessionService};
use crate::domain::entities::{
    Certificate, CertificateDraft, Project, ProjectDraft, Skill, SkillDraft, SocialLink,
    SocialLinkDraft,
};

/// One controller per reorderable collection, plus the profile and
/// session services. Cloning is cheap; everything is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub skills: Arc<CollectionService<Skill, SkillDraft>>,
    pub projects: Arc<CollectionService<Project, ProjectDraft>>,
    pub certificates: Arc<CollectionService<Certificate, CertificateDraft>>,
    pub social_links: Arc<CollectionService<SocialLink, SocialLinkDraft>>,
    pub profile: Arc<ProfileService>,
    pub sessions: Arc<SessionService>,
}
