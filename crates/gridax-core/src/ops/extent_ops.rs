use super::document::Document;
use super::grid_ops;
use super::transaction::Transaction;
use crate::errors::Result;
use crate::model::DatumEnd;

/// Name the toggle scope is opened under, mirrored in undo-style UIs
pub const TOGGLE_SCOPE_NAME: &str = "Toggle grid extent mode";

/// Flip the datum extent mode of every grid visible in a view
///
/// For each grid, both ends are read and flipped independently via
/// [`DatumExtentMode::toggled`](crate::model::DatumExtentMode::toggled):
/// recognized modes swap, unrecognized modes stay as they are. All
/// mutations happen inside a single [`Transaction`]; an error on any
/// grid rolls the whole scope back. A view with zero visible grids
/// commits an empty scope.
///
/// Callers are expected to have run the view policy first; this
/// function applies no guard of its own.
///
/// # Returns
/// The number of grids processed
///
/// # Errors
/// * `ViewNotFound` - If the view doesn't exist
pub fn toggle_view_extents(doc: &mut Document, view_id: &str) -> Result<usize> {
    let grid_ids: Vec<String> = doc
        .grids_in_view(view_id)?
        .iter()
        .map(|g| g.id.clone())
        .collect();

    let mut txn = Transaction::start(doc, TOGGLE_SCOPE_NAME);

    for grid_id in &grid_ids {
        for end in DatumEnd::BOTH {
            let mode = grid_ops::datum_extent_in_view(txn.document(), grid_id, end, view_id)?;
            let flipped = mode.toggled();
            if flipped != mode {
                grid_ops::set_datum_extent(txn.document(), grid_id, end, view_id, flipped)?;
            }
        }
    }

    txn.commit();
    Ok(grid_ids.len())
}
