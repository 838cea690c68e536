//! Core domain entities representing the portfolio data model.
//!
//! Entities are plain data structures without business logic. Each
//! reorderable entity (everything except [`Profile`]) implements
//! [`crate::domain::collection::Orderable`] and carries a `display_order`
//! the controller overwrites on reorder.
//!
//! # Entity Types
//!
//! - [`Skill`] - a skill with proficiency level and icon
//! - [`Project`] - a portfolio project with image and links
//! - [`Certificate`] - a certification with issuer and preview image
//! - [`SocialLink`] - an external profile link
//! - [`Profile`] - the singleton "about me" record (not orderable)
//!
//! Draft structs (`SkillDraft`, `ProjectDraft`, ...) carry validated input
//! for create/update; server-assigned fields (id, timestamps,
//! display_order) never appear in drafts.

pub mod certificate;
pub mod profile;
pub mod project;
pub mod skill;
pub mod social_link;

pub use certificate::{Certificate, CertificateDraft};
pub use profile::{Profile, ProfileDraft};
pub use project::{Project, ProjectDraft};
pub use skill::{Skill, SkillDraft};
pub use social_link::{SocialLink, SocialLinkDraft};
