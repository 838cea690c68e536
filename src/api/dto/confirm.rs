//! Query parameters for destructive endpoints.

use serde::Deserialize;

/// Query string for `DELETE` endpoints.
///
/// The dashboard sets `confirm=true` only after the user has answered the
/// confirmation dialog; a delete without it is rejected before any store
/// call is made.
#[derive(Debug, Deserialize)]
pub struct ConfirmParams {
    #[serde(default)]
    pub confirm: bool,
}
