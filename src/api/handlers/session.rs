//! Handlers for admin session endpoints.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode, header::SET_COOKIE},
    response::{AppendHeaders, IntoResponse},
};
use validator::Validate;

use crate::api::dto::login::{LoginRequest, LoginResponse};
use crate::api::middleware::auth::{SESSION_COOKIE, session_token};
use crate::error::AppError;
use crate::state::AppState;

/// Authenticates the admin and issues a session cookie.
///
/// # Endpoint
///
/// `POST /api/admin/login`
///
/// The token travels only in an `HttpOnly` cookie; the JSON body carries
/// the session expiry so the dashboard can warn before it lapses.
///
/// # Errors
///
/// Returns 401 Unauthorized when the password does not match.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let (token, session) = state.sessions.login(&payload.password).await?;
    let max_age = (session.expires_at - session.issued_at).num_seconds();

    let cookie =
        format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Strict; Max-Age={max_age}");

    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(LoginResponse {
            expires_at: session.expires_at,
        }),
    ))
}

/// Revokes the current session and clears the cookie.
///
/// # Endpoint
///
/// `POST /api/admin/logout`
///
/// Always succeeds; logging out with a stale or missing cookie is not an
/// error.
pub async fn logout_handler(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    if let Some(token) = session_token(&headers) {
        state.sessions.logout(&token).await;
    }

    let cookie = format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Strict; Max-Age=0");

    (
        StatusCode::NO_CONTENT,
        AppendHeaders([(SET_COOKIE, cookie)]),
    )
}
