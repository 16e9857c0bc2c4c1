use chrono::Utc;
use uuid::Uuid;

use super::document::Document;
use crate::errors::{GridaxError, Result};
use crate::model::{DatumEnd, DatumExtentMode, Grid};

/// Create a new grid with the given name, visible in no view
///
/// Automatically generates a UUID v7 for the grid ID.
///
/// # Arguments
/// * `doc` - Mutable reference to the Document
/// * `name` - Grid bubble label (must not be empty or whitespace-only)
///
/// # Returns
/// The ID of the newly created grid
///
/// # Errors
/// * `InvalidName` - If name is empty or contains only whitespace
pub fn create_grid(doc: &mut Document, name: String) -> Result<String> {
    if name.trim().is_empty() {
        return Err(GridaxError::InvalidName {
            reason: "Grid name cannot be empty or whitespace-only".to_string(),
        });
    }

    let grid_id = Uuid::now_v7().to_string();
    doc.insert_grid(Grid::new(grid_id.clone(), name));
    Ok(grid_id)
}

/// Make a grid visible in a view with host-default extents (both ends Model)
///
/// No-op if the grid is already visible there.
///
/// # Errors
/// * `GridNotFound` - If the grid doesn't exist
/// * `ViewNotFound` - If the view doesn't exist
pub fn show_grid_in_view(doc: &mut Document, grid_id: &str, view_id: &str) -> Result<()> {
    doc.get_view(view_id)?;
    let grid = doc.get_grid_mut(grid_id)?;
    grid.show_in_view(view_id);
    Ok(())
}

/// Get the extent mode a grid stores for one end in one view
///
/// # Errors
/// * `GridNotFound` - If the grid doesn't exist
/// * `ViewNotFound` - If the view doesn't exist
/// * `GridNotInView` - If the grid is not visible in the view
pub fn datum_extent_in_view(
    doc: &Document,
    grid_id: &str,
    end: DatumEnd,
    view_id: &str,
) -> Result<DatumExtentMode> {
    doc.get_view(view_id)?;
    let grid = doc.get_grid(grid_id)?;
    let pair = grid
        .extents_in_view(view_id)
        .ok_or_else(|| GridaxError::GridNotInView {
            grid_id: grid_id.to_string(),
            view_id: view_id.to_string(),
        })?;
    Ok(pair.end(end))
}

/// Set the extent mode a grid stores for one end in one view
///
/// Updates the grid's `updated_at` timestamp. The other end and every
/// other view are untouched.
///
/// # Errors
/// * `GridNotFound` - If the grid doesn't exist
/// * `ViewNotFound` - If the view doesn't exist
/// * `GridNotInView` - If the grid is not visible in the view
pub fn set_datum_extent(
    doc: &mut Document,
    grid_id: &str,
    end: DatumEnd,
    view_id: &str,
    mode: DatumExtentMode,
) -> Result<()> {
    doc.get_view(view_id)?;
    let grid = doc.get_grid_mut(grid_id)?;
    let pair = grid
        .extents_in_view_mut(view_id)
        .ok_or_else(|| GridaxError::GridNotInView {
            grid_id: grid_id.to_string(),
            view_id: view_id.to_string(),
        })?;
    pair.set_end(end, mode);
    grid.updated_at = Utc::now();
    Ok(())
}
