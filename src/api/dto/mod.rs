//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Each request DTO converts into the matching domain
//! draft via `into_draft()` once validation has passed.

pub mod certificate;
pub mod confirm;
pub mod health;
pub mod login;
pub mod profile;
pub mod project;
pub mod reorder;
pub mod skill;
pub mod social_link;
