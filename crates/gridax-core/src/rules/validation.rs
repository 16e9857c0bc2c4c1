use crate::errors::{GridaxError, Result};
use crate::ops::Document;

use super::invariants;

/// Validate the document's referential integrity
///
/// Runs all invariant checks and returns an error if any violations are
/// found:
///
/// 1. Every per-view extent entry on every grid references an existing view
/// 2. Every view and grid carries a non-empty name
///
/// # Arguments
/// * `doc` - Reference to the Document to validate
///
/// # Errors
/// Returns the first validation error encountered. For exhaustive
/// reporting, call the individual invariant functions directly.
pub fn validate_document(doc: &Document) -> Result<()> {
    let dangling = invariants::find_dangling_view_refs(doc);
    if let Some((grid_id, view_id)) = dangling.first() {
        return Err(GridaxError::DanglingViewRef {
            grid_id: grid_id.clone(),
            view_id: view_id.clone(),
        });
    }

    let unnamed = invariants::find_unnamed_entities(doc);
    if let Some(id) = unnamed.first() {
        return Err(GridaxError::InvalidName {
            reason: format!("Entity {} has an empty name", id),
        });
    }

    Ok(())
}
