//! View policy trait and implementations
//!
//! This module defines the `ViewPolicy` trait, which decides whether the
//! active view supports per-view datum extents at all. The toggle
//! operation treats the policy as an opaque boolean oracle: a denied
//! view produces a cancelled outcome before any edit scope is opened.

use crate::model::{View, ViewKind};

/// Policy trait for deciding whether a view supports datum extent edits
///
/// Pure predicate over view metadata; implementations must not mutate
/// anything and must return a stable answer for a given view.
pub trait ViewPolicy {
    /// Check whether datum extents may be edited in this view
    fn permits_datum_edit(&self, view: &View) -> bool;
}

/// Default rule set over view categories
///
/// Plan-like views, elevations, sections and details place grids on a
/// working plane, so per-view extents are meaningful there. Schedules,
/// legends and drafting views have no datum geometry, and 3D views show
/// only the model extent, so all four are denied.
///
/// # Example
/// ```
/// use gridax_core::model::{View, ViewKind};
/// use gridax_core::policy::{DatumViewPolicy, ViewPolicy};
///
/// let policy = DatumViewPolicy;
/// let plan = View::new("v1".into(), "Level 1".into(), ViewKind::FloorPlan);
/// let schedule = View::new("v2".into(), "Door Schedule".into(), ViewKind::Schedule);
///
/// assert!(policy.permits_datum_edit(&plan));
/// assert!(!policy.permits_datum_edit(&schedule));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DatumViewPolicy;

impl ViewPolicy for DatumViewPolicy {
    fn permits_datum_edit(&self, view: &View) -> bool {
        matches!(
            view.kind,
            ViewKind::FloorPlan
                | ViewKind::CeilingPlan
                | ViewKind::EngineeringPlan
                | ViewKind::Elevation
                | ViewKind::Section
                | ViewKind::Detail
        )
    }
}

/// Policy that permits every view (for callers that bypass the guard)
#[derive(Debug, Clone, Copy, Default)]
pub struct PermitAllViewPolicy;

impl ViewPolicy for PermitAllViewPolicy {
    fn permits_datum_edit(&self, _view: &View) -> bool {
        true
    }
}

/// Policy that denies every view (for tests that verify the cancelled path)
#[derive(Debug, Clone, Copy, Default)]
pub struct DenyAllViewPolicy;

impl ViewPolicy for DenyAllViewPolicy {
    fn permits_datum_edit(&self, _view: &View) -> bool {
        false
    }
}
