//! Handlers for the projects collection.
//!
//! Create and update arrive as multipart: a `payload` JSON part plus an
//! optional `image` file. When a file is present it is uploaded first and
//! its URL replaces whatever the payload carried; an upload failure aborts
//! the whole operation before the database is touched.

use axum::{
    Json,
    extract::{Multipart, Path, Query, State},
};

use crate::api::dto::confirm::ConfirmParams;
use crate::api::dto::project::ProjectPayload;
use crate::api::dto::reorder::ReorderRequest;
use crate::api::multipart::AdminForm;
use crate::domain::entities::Project;
use crate::domain::repositories::Bucket;
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/projects` - canonical project list in display order.
pub async fn list_projects_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Project>>, AppError> {
    Ok(Json(state.projects.refresh().await?))
}

/// `POST /api/admin/projects` - creates a project, appended to the end.
pub async fn create_project_handler(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<Vec<Project>>, AppError> {
    let mut form = AdminForm::read(multipart).await?;
    let payload: ProjectPayload = form.payload()?;
    let pending = form.take_file("image").map(|f| (f, Bucket::Projects));

    Ok(Json(state.projects.add(payload.into_draft(), pending).await?))
}

/// `PUT /api/admin/projects/{id}` - replaces a project's fields.
pub async fn update_project_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<Json<Vec<Project>>, AppError> {
    let mut form = AdminForm::read(multipart).await?;
    let payload: ProjectPayload = form.payload()?;
    let pending = form.take_file("image").map(|f| (f, Bucket::Projects));

    Ok(Json(
        state
            .projects
            .update_entry(&id, payload.into_draft(), pending)
            .await?,
    ))
}

/// `DELETE /api/admin/projects/{id}?confirm=true` - deletes a project.
pub async fn delete_project_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<ConfirmParams>,
) -> Result<Json<Vec<Project>>, AppError> {
    Ok(Json(state.projects.remove(&id, params.confirm).await?))
}

/// `POST /api/admin/projects/reorder` - moves one project to a new position.
pub async fn reorder_projects_handler(
    State(state): State<AppState>,
    Json(payload): Json<ReorderRequest>,
) -> Result<Json<Vec<Project>>, AppError> {
    Ok(Json(
        state
            .projects
            .reorder(payload.source_index, payload.target_index)
            .await?,
    ))
}
