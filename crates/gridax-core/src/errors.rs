use thiserror::Error;

/// Result type alias using GridaxError
pub type Result<T> = std::result::Result<T, GridaxError>;

/// Error taxonomy for Gridax document operations
///
/// Every variant maps to a stable `ERR_*` code via [`GridaxError::code`],
/// used by structured logging and external tooling. A view failing the
/// view policy is deliberately NOT an error: the toggle operation reports
/// it as a cancelled outcome instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridaxError {
    /// View not found in the document
    #[error("View not found: {view_id}")]
    ViewNotFound { view_id: String },

    /// Grid not found in the document
    #[error("Grid not found: {grid_id}")]
    GridNotFound { grid_id: String },

    /// Grid exists but is not visible in the given view
    #[error("Grid {grid_id} is not visible in view {view_id}")]
    GridNotInView { grid_id: String, view_id: String },

    /// Entity name failed validation
    #[error("Invalid name: {reason}")]
    InvalidName { reason: String },

    /// A grid stores extent state for a view that does not exist
    #[error("Grid {grid_id} stores extents for unknown view {view_id}")]
    DanglingViewRef { grid_id: String, view_id: String },
}

impl GridaxError {
    /// Get the stable error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            GridaxError::ViewNotFound { .. } => "ERR_VIEW_NOT_FOUND",
            GridaxError::GridNotFound { .. } => "ERR_GRID_NOT_FOUND",
            GridaxError::GridNotInView { .. } => "ERR_GRID_NOT_IN_VIEW",
            GridaxError::InvalidName { .. } => "ERR_INVALID_NAME",
            GridaxError::DanglingViewRef { .. } => "ERR_DANGLING_VIEW_REF",
        }
    }
}
