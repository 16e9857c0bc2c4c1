use gridax_core::model::View;
use gridax_core::{Document, Result};

/// Standing state a host application owns on the add-in's behalf
///
/// Commands read the document and the active view from here and write
/// the new document state back after a successful apply.
#[derive(Debug, Clone)]
pub struct Session {
    /// The open document
    pub document: Document,
    /// ID of the view currently displayed to the user
    pub active_view_id: String,
}

impl Session {
    /// Create a session over a document with the given active view
    pub fn new(document: Document, active_view_id: impl Into<String>) -> Self {
        Self {
            document,
            active_view_id: active_view_id.into(),
        }
    }

    /// Resolve the active view in the document
    ///
    /// # Errors
    /// * `ViewNotFound` - If the active view ID is stale
    pub fn active_view(&self) -> Result<&View> {
        self.document.get_view(&self.active_view_id)
    }
}
