//! DTO for collection reorder endpoints.

use serde::Deserialize;

/// Request body for `POST /api/admin/{collection}/reorder`.
///
/// Both indices refer to positions in the current display order; bounds are
/// checked against the live collection, not here.
#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub source_index: usize,
    pub target_index: usize,
}
