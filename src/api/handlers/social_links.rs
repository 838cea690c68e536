//! Handlers for the social links collection.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use validator::Validate;

use crate::api::dto::confirm::ConfirmParams;
use crate::api::dto::reorder::ReorderRequest;
use crate::api::dto::social_link::SocialLinkPayload;
use crate::domain::entities::SocialLink;
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/social-links` - canonical link list in display order.
pub async fn list_social_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<SocialLink>>, AppError> {
    Ok(Json(state.social_links.refresh().await?))
}

/// `POST /api/admin/social-links` - creates a link, appended to the end.
pub async fn create_social_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<SocialLinkPayload>,
) -> Result<Json<Vec<SocialLink>>, AppError> {
    payload.validate()?;
    Ok(Json(
        state.social_links.add(payload.into_draft(), None).await?,
    ))
}

/// `PUT /api/admin/social-links/{id}` - replaces a link's fields.
pub async fn update_social_link_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<SocialLinkPayload>,
) -> Result<Json<Vec<SocialLink>>, AppError> {
    payload.validate()?;
    Ok(Json(
        state
            .social_links
            .update_entry(&id, payload.into_draft(), None)
            .await?,
    ))
}

/// `DELETE /api/admin/social-links/{id}?confirm=true` - deletes a link.
pub async fn delete_social_link_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<ConfirmParams>,
) -> Result<Json<Vec<SocialLink>>, AppError> {
    Ok(Json(state.social_links.remove(&id, params.confirm).await?))
}

/// `POST /api/admin/social-links/reorder` - moves one link to a new position.
pub async fn reorder_social_links_handler(
    State(state): State<AppState>,
    Json(payload): Json<ReorderRequest>,
) -> Result<Json<Vec<SocialLink>>, AppError> {
    Ok(Json(
        state
            .social_links
            .reorder(payload.source_index, payload.target_index)
            .await?,
    ))
}
