//! Handlers for the skills collection.
//!
//! Skills carry no media, so the admin endpoints take plain JSON bodies.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use validator::Validate;

use crate::api::dto::confirm::ConfirmParams;
use crate::api::dto::reorder::ReorderRequest;
use crate::api::dto::skill::SkillPayload;
use crate::domain::entities::Skill;
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/skills` - canonical skill list in display order.
pub async fn list_skills_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Skill>>, AppError> {
    Ok(Json(state.skills.refresh().await?))
}

/// `POST /api/admin/skills` - creates a skill, appended to the end.
pub async fn create_skill_handler(
    State(state): State<AppState>,
    Json(payload): Json<SkillPayload>,
) -> Result<Json<Vec<Skill>>, AppError> {
    payload.validate()?;
    Ok(Json(state.skills.add(payload.into_draft(), None).await?))
}

/// `PUT /api/admin/skills/{id}` - replaces a skill's fields.
pub async fn update_skill_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<SkillPayload>,
) -> Result<Json<Vec<Skill>>, AppError> {
    payload.validate()?;
    Ok(Json(
        state
            .skills
            .update_entry(&id, payload.into_draft(), None)
            .await?,
    ))
}

/// `DELETE /api/admin/skills/{id}?confirm=true` - deletes a skill.
pub async fn delete_skill_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<ConfirmParams>,
) -> Result<Json<Vec<Skill>>, AppError> {
    Ok(Json(state.skills.remove(&id, params.confirm).await?))
}

/// `POST /api/admin/skills/reorder` - moves one skill to a new position.
pub async fn reorder_skills_handler(
    State(state): State<AppState>,
    Json(payload): Json<ReorderRequest>,
) -> Result<Json<Vec<Skill>>, AppError> {
    Ok(Json(
        state
            .skills
            .reorder(payload.source_index, payload.target_index)
            .await?,
    ))
}
