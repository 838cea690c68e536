//! Object-storage collaborator for image and document uploads.

use async_trait::async_trait;

use crate::error::AppError;

/// Target bucket for an upload.
///
/// Each admin endpoint picks its bucket; clients never name one directly,
/// so the enum is exhaustive on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Avatars,
    Covers,
    Projects,
    Certificates,
}

impl Bucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::Avatars => "avatars",
            Bucket::Covers => "covers",
            Bucket::Projects => "projects",
            Bucket::Certificates => "certificates",
        }
    }
}

/// A file selected in an admin form, held in memory until the owning save
/// operation runs.
#[derive(Debug, Clone)]
pub struct PendingUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Implemented by drafts whose entity carries an uploaded image.
///
/// The controller uploads a pending file first and attaches the returned
/// URL to the draft before the persistence store is called.
pub trait UploadTarget {
    fn attach_upload(&mut self, url: String);
}

/// Stores a binary and returns a retrievable URL.
///
/// Upload failures are [`AppError::Upload`], kept distinct from save errors
/// so a caller is never told "saved" when only the file failed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Writes the upload into `bucket` and returns its public URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upload`] when the file is empty or the write
    /// fails.
    async fn put(&self, upload: PendingUpload, bucket: Bucket) -> Result<String, AppError>;
}
