//! Invariant check helpers over a Document
//!
//! Each function returns every violation it finds, sorted, so callers
//! can report deterministically. `validation::validate_document` wraps
//! these into a single pass returning the first violation as an error.

use crate::ops::Document;

/// Find grid extent entries that reference a view the document no longer has
///
/// Returns `(grid_id, view_id)` pairs sorted by grid then view.
pub fn find_dangling_view_refs(doc: &Document) -> Vec<(String, String)> {
    let mut dangling = Vec::new();
    for grid in doc.list_grids() {
        for view_id in grid.extents.keys() {
            if doc.get_view(view_id).is_err() {
                dangling.push((grid.id.clone(), view_id.clone()));
            }
        }
    }
    dangling.sort();
    dangling
}

/// Find views and grids whose names are empty or whitespace-only
///
/// Creation ops validate names, but documents can also arrive from
/// deserialization. Returns offending entity IDs, sorted.
pub fn find_unnamed_entities(doc: &Document) -> Vec<String> {
    let mut unnamed = Vec::new();
    for view in doc.list_views() {
        if view.name.trim().is_empty() {
            unnamed.push(view.id.clone());
        }
    }
    for grid in doc.list_grids() {
        if grid.name.trim().is_empty() {
            unnamed.push(grid.id.clone());
        }
    }
    unnamed.sort();
    unnamed
}
