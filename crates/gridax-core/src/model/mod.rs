pub mod extent;
pub mod grid;
pub mod view;

pub use extent::{DatumEnd, DatumExtentMode, ExtentPair};
pub use grid::Grid;
pub use view::{View, ViewKind};
