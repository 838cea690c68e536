//! Local-disk object storage.
//!
//! Uploads land under `<root>/<bucket>/<random>-<name>` and are served back
//! through the `/uploads` static route, so the returned URL is directly
//! retrievable by the public site.

use async_trait::async_trait;
use serde_json::json;
use std::path::PathBuf;

use crate::domain::repositories::{Bucket, FileStore, PendingUpload};
use crate::error::AppError;
use crate::utils::file_name::storage_name;

/// File store writing to a local directory.
pub struct LocalFileStore {
    root: PathBuf,
    public_base: String,
}

impl LocalFileStore {
    /// Creates a store rooted at `root`; returned URLs are prefixed with
    /// `public_base` (e.g. `https://example.com`).
    pub fn new(root: impl Into<PathBuf>, public_base: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_base: public_base.into(),
        }
    }
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn put(&self, upload: PendingUpload, bucket: Bucket) -> Result<String, AppError> {
        if upload.bytes.is_empty() {
            return Err(AppError::upload(
                "Uploaded file is empty",
                json!({ "file_name": upload.file_name }),
            ));
        }

        let name = storage_name(&upload.file_name);
        let dir = self.root.join(bucket.as_str());

        tokio::fs::create_dir_all(&dir).await.map_err(|e| {
            AppError::upload(
                "Failed to prepare upload directory",
                json!({ "bucket": bucket.as_str(), "reason": e.to_string() }),
            )
        })?;

        let path = dir.join(&name);
        tokio::fs::write(&path, &upload.bytes).await.map_err(|e| {
            AppError::upload(
                "Failed to store uploaded file",
                json!({ "file_name": upload.file_name, "reason": e.to_string() }),
            )
        })?;

        tracing::debug!(
            bucket = bucket.as_str(),
            name,
            size = upload.bytes.len(),
            "file stored"
        );

        Ok(format!(
            "{}/uploads/{}/{}",
            self.public_base.trim_end_matches('/'),
            bucket.as_str(),
            name
        ))
    }
}
