//! Persistence trait for the singleton profile record.

use async_trait::async_trait;

use crate::domain::entities::{Profile, ProfileDraft};
use crate::error::AppError;

/// Persistence interface for the profile.
///
/// The profile is a single row updated whole-record; there is no ordering
/// and no delete.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Returns the profile.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the row has not been seeded,
    /// [`AppError::Internal`] on database errors.
    async fn get(&self) -> Result<Profile, AppError>;

    /// Replaces the profile's fields.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the row has not been seeded,
    /// [`AppError::Internal`] on database errors.
    async fn update(&self, draft: ProfileDraft) -> Result<(), AppError>;
}
