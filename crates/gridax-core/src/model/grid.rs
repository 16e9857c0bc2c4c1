use std::collections::hash_map::Entry;
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::extent::ExtentPair;

/// Grid - a planar datum line in the document
///
/// A grid is visible in a view exactly when it stores an `ExtentPair`
/// for that view. Extent state is per-grid-per-view-per-end; two views
/// showing the same grid never share extent modes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    /// Unique identifier for this grid (UUID v7)
    pub id: String,

    /// Human-readable grid name (the bubble label, e.g. "A" or "12")
    pub name: String,

    /// Per-view extent state, keyed by view ID
    pub extents: HashMap<String, ExtentPair>,

    /// Timestamp when this grid was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when this grid was last updated
    pub updated_at: DateTime<Utc>,
}

impl Grid {
    /// Create a new grid with the given ID and name, visible in no view
    pub fn new(id: String, name: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            extents: HashMap::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether this grid is visible in the given view
    pub fn is_visible_in(&self, view_id: &str) -> bool {
        self.extents.contains_key(view_id)
    }

    /// Get the extent pair this grid stores for a view, if visible there
    pub fn extents_in_view(&self, view_id: &str) -> Option<&ExtentPair> {
        self.extents.get(view_id)
    }

    /// Mutable access to the extent pair for a view, if visible there
    pub fn extents_in_view_mut(&mut self, view_id: &str) -> Option<&mut ExtentPair> {
        self.extents.get_mut(view_id)
    }

    /// Make this grid visible in a view with the host-default extents
    ///
    /// No-op if the grid is already visible there; existing extent state
    /// is never reset.
    pub fn show_in_view(&mut self, view_id: impl Into<String>) {
        if let Entry::Vacant(entry) = self.extents.entry(view_id.into()) {
            entry.insert(ExtentPair::default());
            self.updated_at = Utc::now();
        }
    }
}
