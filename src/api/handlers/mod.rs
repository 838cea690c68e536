//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.
//! The four collection modules are thin shims over the shared
//! [`crate::application::services::CollectionService`].

pub mod certificates;
pub mod health;
pub mod profile;
pub mod projects;
pub mod session;
pub mod skills;
pub mod social_links;
