//! Document file helpers
//!
//! The CLI persists the in-memory document as pretty-printed JSON. The
//! file is a working fixture, not an interchange format.

use std::path::Path;

use gridax_core::rules::validation;
use gridax_core::Document;

/// Default document path relative to the working directory
pub const DEFAULT_DOC_PATH: &str = ".gridax/document.json";

/// Load and validate a document from a JSON file
pub fn load(path: &Path) -> Result<Document, Box<dyn std::error::Error>> {
    let data = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
    let doc: Document = serde_json::from_str(&data)?;
    validation::validate_document(&doc)?;
    Ok(doc)
}

/// Save a document to a JSON file, creating parent directories
pub fn save(path: &Path, doc: &Document) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, serde_json::to_string_pretty(doc)?)?;
    Ok(())
}

/// Resolve a view by ID first, then by name
pub fn resolve_view_id(doc: &Document, view: &str) -> Result<String, Box<dyn std::error::Error>> {
    if let Ok(v) = doc.get_view(view) {
        return Ok(v.id.clone());
    }
    if let Some(v) = doc.find_view_by_name(view) {
        return Ok(v.id.clone());
    }
    Err(format!("no view with ID or name '{}'", view).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridax_core::model::ViewKind;
    use gridax_core::ops::view_ops;

    #[test]
    fn test_resolve_view_by_id_and_name() {
        let mut doc = Document::new();
        let id = view_ops::create_view(&mut doc, "Level 1".to_string(), ViewKind::FloorPlan)
            .unwrap();

        assert_eq!(resolve_view_id(&doc, &id).unwrap(), id);
        assert_eq!(resolve_view_id(&doc, "Level 1").unwrap(), id);
        assert!(resolve_view_id(&doc, "Level 9").is_err());
    }
}
