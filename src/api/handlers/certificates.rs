//! Handlers for the certificates collection.
//!
//! Same multipart conventions as projects; the optional file part is named
//! `image` and lands in the certificates bucket.

use axum::{
    Json,
    extract::{Multipart, Path, Query, State},
};

use crate::api::dto::certificate::CertificatePayload;
use crate::api::dto::confirm::ConfirmParams;
use crate::api::dto::reorder::ReorderRequest;
use crate::api::multipart::AdminForm;
use crate::domain::entities::Certificate;
use crate::domain::repositories::Bucket;
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/certificates` - canonical certificate list in display order.
pub async fn list_certificates_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Certificate>>, AppError> {
    Ok(Json(state.certificates.refresh().await?))
}

/// `POST /api/admin/certificates` - creates a certificate, appended to the end.
pub async fn create_certificate_handler(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<Vec<Certificate>>, AppError> {
    let mut form = AdminForm::read(multipart).await?;
    let payload: CertificatePayload = form.payload()?;
    let pending = form.take_file("image").map(|f| (f, Bucket::Certificates));

    Ok(Json(
        state.certificates.add(payload.into_draft(), pending).await?,
    ))
}

/// `PUT /api/admin/certificates/{id}` - replaces a certificate's fields.
pub async fn update_certificate_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<Json<Vec<Certificate>>, AppError> {
    let mut form = AdminForm::read(multipart).await?;
    let payload: CertificatePayload = form.payload()?;
    let pending = form.take_file("image").map(|f| (f, Bucket::Certificates));

    Ok(Json(
        state
            .certificates
            .update_entry(&id, payload.into_draft(), pending)
            .await?,
    ))
}

/// `DELETE /api/admin/certificates/{id}?confirm=true` - deletes a certificate.
pub async fn delete_certificate_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<ConfirmParams>,
) -> Result<Json<Vec<Certificate>>, AppError> {
    Ok(Json(state.certificates.remove(&id, params.confirm).await?))
}

/// `POST /api/admin/certificates/reorder` - moves one certificate to a new position.
pub async fn reorder_certificates_handler(
    State(state): State<AppState>,
    Json(payload): Json<ReorderRequest>,
) -> Result<Json<Vec<Certificate>>, AppError> {
    Ok(Json(
        state
            .certificates
            .reorder(payload.source_index, payload.target_index)
            .await?,
    ))
}
