//! Domain layer containing business entities and logic.
//!
//! This module implements the core domain logic following Clean Architecture
//! principles. It defines entities, repository interfaces, and the ordered-
//! collection primitives, independent of infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`collection`] - Ordered-collection trait and list-move helpers
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])

pub mod collection;
pub mod entities;
pub mod repositories;
