//! PostgreSQL store for the singleton profile record.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Profile, ProfileDraft};
use crate::domain::repositories::ProfileStore;
use crate::error::AppError;

const COLUMNS: &str = "id, name, title, description, bio, avatar_url, cover_image, location, \
                       email, phone, linkedin_url, github_url, resume_url, updated_at";

/// PostgreSQL-backed profile record. The row is seeded by migrations.
pub struct PgProfileStore {
    pool: Arc<PgPool>,
}

impl PgProfileStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileStore for PgProfileStore {
    async fn get(&self) -> Result<Profile, AppError> {
        sqlx::query_as::<_, Profile>(&format!("SELECT {COLUMNS} FROM profile LIMIT 1"))
            .fetch_optional(self.pool.as_ref())
            .await?
            .ok_or_else(|| AppError::not_found("Profile has not been seeded", json!({})))
    }

    async fn update(&self, draft: ProfileDraft) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE profile
             SET name = $1, title = $2, description = $3, bio = $4, avatar_url = $5,
                 cover_image = $6, location = $7, email = $8, phone = $9,
                 linkedin_url = $10, github_url = $11, resume_url = $12, updated_at = now()",
        )
        .bind(draft.name)
        .bind(draft.title)
        .bind(draft.description)
        .bind(draft.bio)
        .bind(draft.avatar_url)
        .bind(draft.cover_image)
        .bind(draft.location)
        .bind(draft.email)
        .bind(draft.phone)
        .bind(draft.linkedin_url)
        .bind(draft.github_url)
        .bind(draft.resume_url)
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Profile has not been seeded", json!({})));
        }
        Ok(())
    }
}
