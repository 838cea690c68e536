//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain store traits using SQLx.
//! Each reorderable collection gets its own store implementing the shared
//! [`crate::domain::repositories::CollectionStore`] contract; bulk order
//! updates run in a single transaction so a reorder is all-or-nothing.
//!
//! # Stores
//!
//! - [`PgSkillStore`] - skills
//! - [`PgProjectStore`] - projects
//! - [`PgCertificateStore`] - certificates
//! - [`PgSocialLinkStore`] - social links
//! - [`PgProfileStore`] - the singleton profile

pub mod pg_certificate_store;
pub mod pg_profile_store;
pub mod pg_project_store;
pub mod pg_skill_store;
pub mod pg_social_link_store;

pub use pg_certificate_store::PgCertificateStore;
pub use pg_profile_store::PgProfileStore;
pub use pg_project_store::PgProjectStore;
pub use pg_skill_store::PgSkillStore;
pub use pg_social_link_store::PgSocialLinkStore;
