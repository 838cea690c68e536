//! PostgreSQL store for the social link collection.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{SocialLink, SocialLinkDraft};
use crate::domain::repositories::CollectionStore;
use crate::error::AppError;

const COLUMNS: &str = "id, platform, url, icon, display_order, created_at, updated_at";

/// PostgreSQL-backed social link collection.
pub struct PgSocialLinkStore {
    pool: Arc<PgPool>,
}

impl PgSocialLinkStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CollectionStore<SocialLink, SocialLinkDraft> for PgSocialLinkStore {
    async fn fetch_all(&self) -> Result<Vec<SocialLink>, AppError> {
        let rows = sqlx::query_as::<_, SocialLink>(&format!(
            "SELECT {COLUMNS} FROM social_links ORDER BY display_order ASC, created_at ASC"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;
        Ok(rows)
    }

    async fn insert(&self, draft: SocialLinkDraft) -> Result<SocialLink, AppError> {
        let row = sqlx::query_as::<_, SocialLink>(&format!(
            "INSERT INTO social_links (platform, url, icon, display_order)
             VALUES ($1, $2, $3, (SELECT COALESCE(MAX(display_order), -1) + 1 FROM social_links))
             RETURNING {COLUMNS}"
        ))
        .bind(draft.platform)
        .bind(draft.url)
        .bind(draft.icon)
        .fetch_one(self.pool.as_ref())
        .await?;
        Ok(row)
    }

    async fn update(&self, id: &str, draft: SocialLinkDraft) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE social_links SET platform = $2, url = $3, icon = $4, updated_at = now()
             WHERE id = $1",
        )
        .bind(id)
        .bind(draft.platform)
        .bind(draft.url)
        .bind(draft.icon)
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "Social link not found",
                json!({ "id": id }),
            ));
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM social_links WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "Social link not found",
                json!({ "id": id }),
            ));
        }
        Ok(())
    }

    async fn set_display_orders(&self, orders: &[(String, i32)]) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;
        for (id, order) in orders {
            let result = sqlx::query(
                "UPDATE social_links SET display_order = $2, updated_at = now() WHERE id = $1",
            )
            .bind(id)
            .bind(order)
            .execute(&mut *tx)
            .await?;
            if result.rows_affected() == 0 {
                return Err(AppError::not_found(
                    "Social link not found",
                    json!({ "id": id }),
                ));
            }
        }
        tx.commit().await?;
        Ok(())
    }
}
