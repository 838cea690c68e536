//! PostgreSQL store for the skill collection.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Skill, SkillDraft};
use crate::domain::repositories::CollectionStore;
use crate::error::AppError;

const COLUMNS: &str = "id, name, level, icon, display_order, created_at, updated_at";

/// PostgreSQL-backed skill collection.
pub struct PgSkillStore {
    pool: Arc<PgPool>,
}

impl PgSkillStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CollectionStore<Skill, SkillDraft> for PgSkillStore {
    async fn fetch_all(&self) -> Result<Vec<Skill>, AppError> {
        let rows = sqlx::query_as::<_, Skill>(&format!(
            "SELECT {COLUMNS} FROM skills ORDER BY display_order ASC, created_at ASC"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;
        Ok(rows)
    }

    async fn insert(&self, draft: SkillDraft) -> Result<Skill, AppError> {
        // New records are appended at the end of the collection.
        let row = sqlx::query_as::<_, Skill>(&format!(
            "INSERT INTO skills (name, level, icon, display_order)
             VALUES ($1, $2, $3, (SELECT COALESCE(MAX(display_order), -1) + 1 FROM skills))
             RETURNING {COLUMNS}"
        ))
        .bind(draft.name)
        .bind(draft.level)
        .bind(draft.icon)
        .fetch_one(self.pool.as_ref())
        .await?;
        Ok(row)
    }

    async fn update(&self, id: &str, draft: SkillDraft) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE skills SET name = $2, level = $3, icon = $4, updated_at = now()
             WHERE id = $1",
        )
        .bind(id)
        .bind(draft.name)
        .bind(draft.level)
        .bind(draft.icon)
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Skill not found", json!({ "id": id })));
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM skills WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Skill not found", json!({ "id": id })));
        }
        Ok(())
    }

    async fn set_display_orders(&self, orders: &[(String, i32)]) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;
        for (id, order) in orders {
            let result =
                sqlx::query("UPDATE skills SET display_order = $2, updated_at = now() WHERE id = $1")
                    .bind(id)
                    .bind(order)
                    .execute(&mut *tx)
                    .await?;
            if result.rows_affected() == 0 {
                // Dropping the transaction rolls every previous update back.
                return Err(AppError::not_found("Skill not found", json!({ "id": id })));
            }
        }
        tx.commit().await?;
        Ok(())
    }
}
