//! Cookie-based session authentication middleware for admin endpoints.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    http::header::COOKIE,
    middleware::Next,
    response::Response,
};
use serde_json::json;

use crate::{error::AppError, state::AppState};

/// Name of the cookie carrying the admin session token.
pub const SESSION_COOKIE: &str = "admin_session";

/// Extracts the session token from the `Cookie` header.
///
/// Handles multiple cookies by splitting on semicolons and picking the
/// [`SESSION_COOKIE`] key-value pair; other cookies are ignored.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(COOKIE)
        .and_then(|cookie_header| cookie_header.to_str().ok())
        .and_then(|cookie_str| {
            cookie_str.split(';').find_map(|cookie| {
                let mut parts = cookie.trim().splitn(2, '=');
                match (parts.next(), parts.next()) {
                    (Some(SESSION_COOKIE), Some(value)) => Some(value.to_string()),
                    _ => None,
                }
            })
        })
}

/// Authenticates admin requests using the session cookie.
///
/// # Authentication Flow
///
/// 1. Extract the [`SESSION_COOKIE`] cookie from the request
/// 2. Validate the token via [`crate::application::services::SessionService`]
/// 3. On success, continue to the handler
///
/// # Errors
///
/// Returns `401 Unauthorized` when the cookie is missing, the token is
/// unknown, or the session has expired.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = session_token(req.headers()).ok_or_else(|| {
        AppError::unauthorized(
            "Unauthorized",
            json!({ "reason": "session cookie is missing" }),
        )
    })?;

    st.sessions.authenticate(&token).await?;

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    #[test]
    fn test_session_token_extracted_among_other_cookies() {
        let headers = headers("theme=dark; admin_session=tok123; lang=en");
        assert_eq!(session_token(&headers), Some("tok123".to_string()));
    }

    #[test]
    fn test_session_token_missing() {
        let headers = headers("theme=dark");
        assert_eq!(session_token(&headers), None);
    }

    #[test]
    fn test_session_token_no_cookie_header() {
        assert_eq!(session_token(&HeaderMap::new()), None);
    }
}
