//! DTOs for the admin login endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for `POST /api/admin/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,
}

/// Response for a successful login. The session token itself travels in an
/// HttpOnly cookie, never in the body.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub expires_at: DateTime<Utc>,
}
