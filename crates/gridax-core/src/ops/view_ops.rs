use uuid::Uuid;

use super::document::Document;
use crate::errors::{GridaxError, Result};
use crate::model::{View, ViewKind};

/// Create a new view with the given name and kind
///
/// Automatically generates a UUID v7 for the view ID.
///
/// # Arguments
/// * `doc` - Mutable reference to the Document
/// * `name` - View name (must not be empty or whitespace-only)
/// * `kind` - Host category of the view
///
/// # Returns
/// The ID of the newly created view
///
/// # Errors
/// * `InvalidName` - If name is empty or contains only whitespace
pub fn create_view(doc: &mut Document, name: String, kind: ViewKind) -> Result<String> {
    if name.trim().is_empty() {
        return Err(GridaxError::InvalidName {
            reason: "View name cannot be empty or whitespace-only".to_string(),
        });
    }

    let view_id = Uuid::now_v7().to_string();
    doc.insert_view(View::new(view_id.clone(), name, kind));
    Ok(view_id)
}

/// Read a view by ID
///
/// # Errors
/// * `ViewNotFound` - If the view doesn't exist
pub fn read_view<'a>(doc: &'a Document, id: &str) -> Result<&'a View> {
    doc.get_view(id)
}
