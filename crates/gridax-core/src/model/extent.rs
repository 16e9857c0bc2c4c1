use serde::{Deserialize, Serialize};

/// Identifies one of the two ends of a grid line
///
/// Grid ends are configured independently; nothing about `End0` ever
/// constrains `End1` or vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatumEnd {
    End0,
    End1,
}

impl DatumEnd {
    /// Both ends, in canonical order
    pub const BOTH: [DatumEnd; 2] = [DatumEnd::End0, DatumEnd::End1];
}

impl std::fmt::Display for DatumEnd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatumEnd::End0 => write!(f, "end0"),
            DatumEnd::End1 => write!(f, "end1"),
        }
    }
}

/// How a grid end's visible extent behaves in a given view
///
/// `Model` follows the 3D model extent; `ViewSpecific` uses a per-view
/// override. `Other` carries any extent code this build does not
/// recognize; such codes pass through every operation untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatumExtentMode {
    Model,
    ViewSpecific,
    Other(i32),
}

impl DatumExtentMode {
    /// The toggle rule, as a pure total function
    ///
    /// `Model` and `ViewSpecific` swap; anything else maps to itself.
    /// Self-inverse on the two recognized modes, identity elsewhere, so
    /// applying it twice always restores the starting mode.
    pub fn toggled(self) -> Self {
        match self {
            DatumExtentMode::Model => DatumExtentMode::ViewSpecific,
            DatumExtentMode::ViewSpecific => DatumExtentMode::Model,
            other => other,
        }
    }

    /// Check whether this mode is one of the two recognized values
    pub fn is_recognized(self) -> bool {
        matches!(self, DatumExtentMode::Model | DatumExtentMode::ViewSpecific)
    }
}

impl std::fmt::Display for DatumExtentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatumExtentMode::Model => write!(f, "model"),
            DatumExtentMode::ViewSpecific => write!(f, "view-specific"),
            DatumExtentMode::Other(code) => write!(f, "other({})", code),
        }
    }
}

/// The per-end extent modes a grid stores for one view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtentPair {
    pub end0: DatumExtentMode,
    pub end1: DatumExtentMode,
}

impl ExtentPair {
    /// Create a pair with explicit per-end modes
    pub fn new(end0: DatumExtentMode, end1: DatumExtentMode) -> Self {
        Self { end0, end1 }
    }

    /// The host default for a newly shown grid: both ends follow the model
    pub fn model() -> Self {
        Self::new(DatumExtentMode::Model, DatumExtentMode::Model)
    }

    /// Get the mode stored for one end
    pub fn end(&self, end: DatumEnd) -> DatumExtentMode {
        match end {
            DatumEnd::End0 => self.end0,
            DatumEnd::End1 => self.end1,
        }
    }

    /// Set the mode stored for one end
    pub fn set_end(&mut self, end: DatumEnd, mode: DatumExtentMode) {
        match end {
            DatumEnd::End0 => self.end0 = mode,
            DatumEnd::End1 => self.end1 = mode,
        }
    }
}

impl Default for ExtentPair {
    fn default() -> Self {
        Self::model()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggled_swaps_recognized_modes() {
        assert_eq!(
            DatumExtentMode::Model.toggled(),
            DatumExtentMode::ViewSpecific
        );
        assert_eq!(
            DatumExtentMode::ViewSpecific.toggled(),
            DatumExtentMode::Model
        );
    }

    #[test]
    fn test_toggled_is_identity_on_other() {
        let mode = DatumExtentMode::Other(7);
        assert_eq!(mode.toggled(), mode);
        assert_eq!(mode.toggled().toggled(), mode);
    }

    #[test]
    fn test_toggled_twice_restores_original() {
        for mode in [
            DatumExtentMode::Model,
            DatumExtentMode::ViewSpecific,
            DatumExtentMode::Other(-3),
        ] {
            assert_eq!(mode.toggled().toggled(), mode);
        }
    }

    #[test]
    fn test_is_recognized() {
        assert!(DatumExtentMode::Model.is_recognized());
        assert!(DatumExtentMode::ViewSpecific.is_recognized());
        assert!(!DatumExtentMode::Other(0).is_recognized());
    }

    #[test]
    fn test_extent_pair_ends_are_independent() {
        let mut pair = ExtentPair::model();
        pair.set_end(DatumEnd::End0, DatumExtentMode::ViewSpecific);

        assert_eq!(pair.end(DatumEnd::End0), DatumExtentMode::ViewSpecific);
        assert_eq!(pair.end(DatumEnd::End1), DatumExtentMode::Model);
    }

    #[test]
    fn test_extent_pair_default_is_model() {
        let pair = ExtentPair::default();
        assert_eq!(pair.end0, DatumExtentMode::Model);
        assert_eq!(pair.end1, DatumExtentMode::Model);
    }
}
