use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::{GridaxError, Result};
use crate::model::{Grid, View};

/// In-memory document holding views and grids
///
/// This is the standalone stand-in for the host application's document.
/// HashMap-backed and single-threaded; all access goes through these
/// methods so the storage can be swapped out without touching callers.
/// `Clone` is what the transaction layer snapshots, and serde is what
/// the CLI persists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Map of view ID to View
    pub(crate) views: HashMap<String, View>,
    /// Map of grid ID to Grid
    pub(crate) grids: HashMap<String, Grid>,
}

impl Document {
    /// Create a new empty Document
    pub fn new() -> Self {
        Self {
            views: HashMap::new(),
            grids: HashMap::new(),
        }
    }

    /// Get a View by ID
    ///
    /// # Errors
    ///
    /// Returns `ViewNotFound` if the view doesn't exist.
    pub fn get_view(&self, id: &str) -> Result<&View> {
        self.views.get(id).ok_or_else(|| GridaxError::ViewNotFound {
            view_id: id.to_string(),
        })
    }

    /// Get a mutable reference to a View by ID
    ///
    /// # Errors
    ///
    /// Returns `ViewNotFound` if the view doesn't exist.
    pub fn get_view_mut(&mut self, id: &str) -> Result<&mut View> {
        self.views
            .get_mut(id)
            .ok_or_else(|| GridaxError::ViewNotFound {
                view_id: id.to_string(),
            })
    }

    /// Get a Grid by ID
    ///
    /// # Errors
    ///
    /// Returns `GridNotFound` if the grid doesn't exist.
    pub fn get_grid(&self, id: &str) -> Result<&Grid> {
        self.grids.get(id).ok_or_else(|| GridaxError::GridNotFound {
            grid_id: id.to_string(),
        })
    }

    /// Get a mutable reference to a Grid by ID
    ///
    /// # Errors
    ///
    /// Returns `GridNotFound` if the grid doesn't exist.
    pub fn get_grid_mut(&mut self, id: &str) -> Result<&mut Grid> {
        self.grids
            .get_mut(id)
            .ok_or_else(|| GridaxError::GridNotFound {
                grid_id: id.to_string(),
            })
    }

    /// List all views
    pub fn list_views(&self) -> Vec<&View> {
        self.views.values().collect()
    }

    /// List all grids
    pub fn list_grids(&self) -> Vec<&Grid> {
        self.grids.values().collect()
    }

    /// Find a view by its human-readable name
    pub fn find_view_by_name(&self, name: &str) -> Option<&View> {
        self.views.values().find(|v| v.name == name)
    }

    /// Enumerate the grids visible in a view, sorted by grid ID
    ///
    /// Sorting makes enumeration order deterministic; each grid's
    /// mutation is independent, so order carries no semantics beyond
    /// reproducibility.
    ///
    /// # Errors
    ///
    /// Returns `ViewNotFound` if the view doesn't exist.
    pub fn grids_in_view(&self, view_id: &str) -> Result<Vec<&Grid>> {
        self.get_view(view_id)?;

        let mut grids: Vec<&Grid> = self
            .grids
            .values()
            .filter(|g| g.is_visible_in(view_id))
            .collect();
        grids.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(grids)
    }

    /// Insert a View into the document
    ///
    /// This is an internal method used by CRUD operations and test helpers.
    pub fn insert_view(&mut self, view: View) {
        self.views.insert(view.id.clone(), view);
    }

    /// Insert a Grid into the document
    ///
    /// This is an internal method used by CRUD operations and test helpers.
    pub fn insert_grid(&mut self, grid: Grid) {
        self.grids.insert(grid.id.clone(), grid);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ViewKind;

    fn sample_view(id: &str, name: &str) -> View {
        View::new(id.to_string(), name.to_string(), ViewKind::FloorPlan)
    }

    #[test]
    fn test_get_view_not_found() {
        let doc = Document::new();
        let result = doc.get_view("missing");
        assert!(matches!(result, Err(GridaxError::ViewNotFound { .. })));
    }

    #[test]
    fn test_insert_and_get_view() {
        let mut doc = Document::new();
        doc.insert_view(sample_view("v1", "Level 1"));

        let view = doc.get_view("v1").unwrap();
        assert_eq!(view.name, "Level 1");
    }

    #[test]
    fn test_get_grid_not_found() {
        let doc = Document::new();
        assert!(matches!(
            doc.get_grid("missing"),
            Err(GridaxError::GridNotFound { .. })
        ));
    }

    #[test]
    fn test_grids_in_view_requires_view() {
        let doc = Document::new();
        let result = doc.grids_in_view("missing");
        assert!(matches!(result, Err(GridaxError::ViewNotFound { .. })));
    }

    #[test]
    fn test_grids_in_view_filters_and_sorts() {
        let mut doc = Document::new();
        doc.insert_view(sample_view("v1", "Level 1"));

        let mut g_b = Grid::new("grid-b".to_string(), "B".to_string());
        g_b.show_in_view("v1");
        let mut g_a = Grid::new("grid-a".to_string(), "A".to_string());
        g_a.show_in_view("v1");
        let g_hidden = Grid::new("grid-c".to_string(), "C".to_string());

        doc.insert_grid(g_b);
        doc.insert_grid(g_a);
        doc.insert_grid(g_hidden);

        let visible = doc.grids_in_view("v1").unwrap();
        let ids: Vec<&str> = visible.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["grid-a", "grid-b"]);
    }

    #[test]
    fn test_find_view_by_name() {
        let mut doc = Document::new();
        doc.insert_view(sample_view("v1", "Level 1"));

        assert_eq!(doc.find_view_by_name("Level 1").unwrap().id, "v1");
        assert!(doc.find_view_by_name("Level 2").is_none());
    }
}
