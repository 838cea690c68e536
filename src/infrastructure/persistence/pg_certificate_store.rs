//! PostgreSQL store for the certificate collection.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Certificate, CertificateDraft};
use crate::domain::repositories::CollectionStore;
use crate::error::AppError;

const COLUMNS: &str = "id, title, issuer, description, image, certificate_url, issue_date, \
                       display_order, created_at, updated_at";

/// PostgreSQL-backed certificate collection.
pub struct PgCertificateStore {
    pool: Arc<PgPool>,
}

impl PgCertificateStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CollectionStore<Certificate, CertificateDraft> for PgCertificateStore {
    async fn fetch_all(&self) -> Result<Vec<Certificate>, AppError> {
        let rows = sqlx::query_as::<_, Certificate>(&format!(
            "SELECT {COLUMNS} FROM certificates ORDER BY display_order ASC, created_at ASC"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;
        Ok(rows)
    }

    async fn insert(&self, draft: CertificateDraft) -> Result<Certificate, AppError> {
        let row = sqlx::query_as::<_, Certificate>(&format!(
            "INSERT INTO certificates (title, issuer, description, image, certificate_url, issue_date, display_order)
             VALUES ($1, $2, $3, $4, $5, $6, (SELECT COALESCE(MAX(display_order), -1) + 1 FROM certificates))
             RETURNING {COLUMNS}"
        ))
        .bind(draft.title)
        .bind(draft.issuer)
        .bind(draft.description)
        .bind(draft.image)
        .bind(draft.certificate_url)
        .bind(draft.issue_date)
        .fetch_one(self.pool.as_ref())
        .await?;
        Ok(row)
    }

    async fn update(&self, id: &str, draft: CertificateDraft) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE certificates
             SET title = $2, issuer = $3, description = $4, image = $5,
                 certificate_url = $6, issue_date = $7, updated_at = now()
             WHERE id = $1",
        )
        .bind(id)
        .bind(draft.title)
        .bind(draft.issuer)
        .bind(draft.description)
        .bind(draft.image)
        .bind(draft.certificate_url)
        .bind(draft.issue_date)
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "Certificate not found",
                json!({ "id": id }),
            ));
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM certificates WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "Certificate not found",
                json!({ "id": id }),
            ));
        }
        Ok(())
    }

    async fn set_display_orders(&self, orders: &[(String, i32)]) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;
        for (id, order) in orders {
            let result = sqlx::query(
                "UPDATE certificates SET display_order = $2, updated_at = now() WHERE id = $1",
            )
            .bind(id)
            .bind(order)
            .execute(&mut *tx)
            .await?;
            if result.rows_affected() == 0 {
                return Err(AppError::not_found(
                    "Certificate not found",
                    json!({ "id": id }),
                ));
            }
        }
        tx.commit().await?;
        Ok(())
    }
}
