//! Profile update service.
//!
//! The profile is a singleton record updated whole-record; avatar and cover
//! images are uploaded before the save so a failed upload never leaves a
//! half-saved profile.

use std::sync::Arc;

use crate::domain::entities::{Profile, ProfileDraft};
use crate::domain::repositories::{Bucket, FileStore, PendingUpload, ProfileStore};
use crate::error::AppError;

/// Service for reading and updating the site owner's profile.
pub struct ProfileService {
    store: Arc<dyn ProfileStore>,
    files: Arc<dyn FileStore>,
}

impl ProfileService {
    /// Creates a new profile service.
    pub fn new(store: Arc<dyn ProfileStore>, files: Arc<dyn FileStore>) -> Self {
        Self { store, files }
    }

    /// Returns the profile.
    pub async fn get(&self) -> Result<Profile, AppError> {
        self.store.get().await
    }

    /// Updates the profile, uploading pending avatar/cover files first.
    ///
    /// Either upload failing aborts the whole operation with no partial
    /// state change; the save request is only issued once both URLs are
    /// resolved. On success the profile is refetched so server-assigned
    /// fields are authoritative.
    pub async fn update(
        &self,
        mut draft: ProfileDraft,
        avatar: Option<PendingUpload>,
        cover: Option<PendingUpload>,
    ) -> Result<Profile, AppError> {
        if let Some(upload) = avatar {
            let url = self.files.put(upload, Bucket::Avatars).await?;
            draft.avatar_url = Some(url);
        }
        if let Some(upload) = cover {
            let url = self.files.put(upload, Bucket::Covers).await?;
            draft.cover_image = Some(url);
        }

        self.store.update(draft).await?;
        tracing::info!("profile updated");
        self.store.get().await
    }
}
