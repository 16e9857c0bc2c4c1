use gridax_core::model::{DatumEnd, DatumExtentMode, ViewKind};
use gridax_core::ops::{grid_ops, view_ops};
use gridax_core::Document;

/// Create a new empty Document for testing
#[allow(dead_code)]
pub fn new_document() -> Document {
    Document::new()
}

/// Create a test view with the given name and kind
#[allow(dead_code)]
pub fn create_test_view(doc: &mut Document, name: &str, kind: ViewKind) -> String {
    view_ops::create_view(doc, name.to_string(), kind).unwrap()
}

/// Create a test grid visible in each of the given views
#[allow(dead_code)]
pub fn create_test_grid(doc: &mut Document, name: &str, view_ids: &[&str]) -> String {
    let grid_id = grid_ops::create_grid(doc, name.to_string()).unwrap();
    for view_id in view_ids {
        grid_ops::show_grid_in_view(doc, &grid_id, view_id).unwrap();
    }
    grid_id
}

/// Read one end's extent mode, panicking on lookup failure
#[allow(dead_code)]
pub fn extent(doc: &Document, grid_id: &str, end: DatumEnd, view_id: &str) -> DatumExtentMode {
    grid_ops::datum_extent_in_view(doc, grid_id, end, view_id).unwrap()
}

/// Write one end's extent mode, panicking on lookup failure
#[allow(dead_code)]
pub fn set_extent(
    doc: &mut Document,
    grid_id: &str,
    end: DatumEnd,
    view_id: &str,
    mode: DatumExtentMode,
) {
    grid_ops::set_datum_extent(doc, grid_id, end, view_id, mode).unwrap();
}
