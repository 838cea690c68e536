//! Ordered-collection primitives shared by every reorderable entity type.
//!
//! A collection is an in-memory `Vec` whose element order is the display
//! order. After any successful mutation, `display_order` values read
//! left-to-right are contiguous and match the array index (index 0 = first).

use crate::error::AppError;
use serde_json::json;

/// Implemented by every record that participates in a user-orderable list.
///
/// The `id` must be stable and non-empty before an entity takes part in
/// reordering; store implementations assign it on creation.
pub trait Orderable: Clone + Send + Sync + 'static {
    /// Stable identifier assigned by the persistence layer.
    fn id(&self) -> &str;

    /// Current display order value.
    fn display_order(&self) -> i32;

    /// Overwrites the display order. The collection treats this field as a
    /// derived output, not an input invariant.
    fn set_display_order(&mut self, order: i32);
}

/// Moves the element at `source` to `target` with list-move semantics:
/// the element is removed and reinserted, and everything between the two
/// positions shifts by one slot. Not a swap.
///
/// `source == target` is a no-op.
///
/// # Errors
///
/// Returns [`AppError::Validation`] when either index is out of range.
pub fn move_entity<T>(items: &mut Vec<T>, source: usize, target: usize) -> Result<(), AppError> {
    let len = items.len();
    if source >= len || target >= len {
        return Err(AppError::bad_request(
            "Reorder index out of range",
            json!({ "source": source, "target": target, "len": len }),
        ));
    }
    if source == target {
        return Ok(());
    }

    let entity = items.remove(source);
    items.insert(target, entity);
    Ok(())
}

/// Assigns each entity a fresh `display_order` equal to its index:
/// 0-based, contiguous, strictly increasing.
pub fn assign_display_orders<T: Orderable>(items: &mut [T]) {
    for (index, item) in items.iter_mut().enumerate() {
        item.set_display_order(index as i32);
    }
}

/// Verifies that every entity carries a stable, non-empty id.
///
/// An entity without an id must never participate in reordering; this is
/// checked before the in-memory sequence is touched so a violation leaves
/// the displayed order intact.
///
/// # Errors
///
/// Returns [`AppError::Internal`] when any entity carries an empty id.
pub fn ensure_stable_ids<T: Orderable>(items: &[T]) -> Result<(), AppError> {
    if let Some(index) = items.iter().position(|item| item.id().is_empty()) {
        return Err(AppError::internal(
            "Entity without a stable id cannot be reordered",
            json!({ "index": index }),
        ));
    }
    Ok(())
}

/// Collects the `(id, display_order)` pairs for a bulk order update.
///
/// Call [`ensure_stable_ids`] first; this assumes ids are present.
pub fn order_payload<T: Orderable>(items: &[T]) -> Vec<(String, i32)> {
    items
        .iter()
        .map(|item| (item.id().to_string(), item.display_order()))
        .collect()
}
