use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category of a view, as the host application classifies it
///
/// The category determines whether per-view datum extents are meaningful:
/// plan-like and section-like views place grids on a working plane, while
/// schedules, legends and drafting views have no datum geometry at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewKind {
    FloorPlan,
    CeilingPlan,
    EngineeringPlan,
    Elevation,
    Section,
    Detail,
    ThreeD,
    Schedule,
    Legend,
    Drafting,
}

impl std::fmt::Display for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ViewKind::FloorPlan => "floor plan",
            ViewKind::CeilingPlan => "ceiling plan",
            ViewKind::EngineeringPlan => "engineering plan",
            ViewKind::Elevation => "elevation",
            ViewKind::Section => "section",
            ViewKind::Detail => "detail",
            ViewKind::ThreeD => "3d",
            ViewKind::Schedule => "schedule",
            ViewKind::Legend => "legend",
            ViewKind::Drafting => "drafting",
        };
        write!(f, "{}", name)
    }
}

/// A display context in the document
///
/// Views own nothing here; grids record their per-view extent state
/// themselves. A view's role is to scope enumeration and to carry the
/// category the view policy inspects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct View {
    /// Unique identifier for this view (UUID v7)
    pub id: String,

    /// Human-readable view name
    pub name: String,

    /// Host category of this view
    pub kind: ViewKind,

    /// Timestamp when this view was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when this view was last updated
    pub updated_at: DateTime<Utc>,
}

impl View {
    /// Create a new view with the given ID, name and kind
    pub fn new(id: String, name: String, kind: ViewKind) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            kind,
            created_at: now,
            updated_at: now,
        }
    }
}
