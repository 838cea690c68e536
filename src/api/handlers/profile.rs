//! Handlers for the profile resource.

use axum::{
    Json,
    extract::{Multipart, State},
};

use crate::api::dto::profile::ProfilePayload;
use crate::api::multipart::AdminForm;
use crate::domain::entities::Profile;
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/profile` - the singleton profile.
pub async fn get_profile_handler(State(state): State<AppState>) -> Result<Json<Profile>, AppError> {
    Ok(Json(state.profile.get().await?))
}

/// `PUT /api/admin/profile` - updates the profile.
///
/// Multipart with a `payload` JSON part plus optional `avatar` and `cover`
/// file parts. Files are uploaded before the profile row is written; an
/// upload failure aborts the save.
pub async fn update_profile_handler(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<Profile>, AppError> {
    let mut form = AdminForm::read(multipart).await?;
    let payload: ProfilePayload = form.payload()?;
    let avatar = form.take_file("avatar");
    let cover = form.take_file("cover");

    Ok(Json(
        state
            .profile
            .update(payload.into_draft(), avatar, cover)
            .await?,
    ))
}
