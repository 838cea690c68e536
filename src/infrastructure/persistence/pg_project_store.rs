//! PostgreSQL store for the project collection.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Project, ProjectDraft};
use crate::domain::repositories::CollectionStore;
use crate::error::AppError;

const COLUMNS: &str = "id, title, description, image, technologies, demo_url, github_url, \
                       display_order, created_at, updated_at";

/// PostgreSQL-backed project collection.
pub struct PgProjectStore {
    pool: Arc<PgPool>,
}

impl PgProjectStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CollectionStore<Project, ProjectDraft> for PgProjectStore {
    async fn fetch_all(&self) -> Result<Vec<Project>, AppError> {
        let rows = sqlx::query_as::<_, Project>(&format!(
            "SELECT {COLUMNS} FROM projects ORDER BY display_order ASC, created_at ASC"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;
        Ok(rows)
    }

    async fn insert(&self, draft: ProjectDraft) -> Result<Project, AppError> {
        let row = sqlx::query_as::<_, Project>(&format!(
            "INSERT INTO projects (title, description, image, technologies, demo_url, github_url, display_order)
             VALUES ($1, $2, $3, $4, $5, $6, (SELECT COALESCE(MAX(display_order), -1) + 1 FROM projects))
             RETURNING {COLUMNS}"
        ))
        .bind(draft.title)
        .bind(draft.description)
        .bind(draft.image)
        .bind(draft.technologies)
        .bind(draft.demo_url)
        .bind(draft.github_url)
        .fetch_one(self.pool.as_ref())
        .await?;
        Ok(row)
    }

    async fn update(&self, id: &str, draft: ProjectDraft) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE projects
             SET title = $2, description = $3, image = $4, technologies = $5,
                 demo_url = $6, github_url = $7, updated_at = now()
             WHERE id = $1",
        )
        .bind(id)
        .bind(draft.title)
        .bind(draft.description)
        .bind(draft.image)
        .bind(draft.technologies)
        .bind(draft.demo_url)
        .bind(draft.github_url)
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Project not found", json!({ "id": id })));
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Project not found", json!({ "id": id })));
        }
        Ok(())
    }

    async fn set_display_orders(&self, orders: &[(String, i32)]) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;
        for (id, order) in orders {
            let result = sqlx::query(
                "UPDATE projects SET display_order = $2, updated_at = now() WHERE id = $1",
            )
            .bind(id)
            .bind(order)
            .execute(&mut *tx)
            .await?;
            if result.rows_affected() == 0 {
                return Err(AppError::not_found("Project not found", json!({ "id": id })));
            }
        }
        tx.commit().await?;
        Ok(())
    }
}
