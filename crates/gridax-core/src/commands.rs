//! Command types for document mutations
//!
//! This module defines the command inventory processed by the `apply()`
//! function. There is a single user-facing mutation today; it still goes
//! through the command boundary so every edit shares one atomicity and
//! validation path.

/// Command enum representing document mutations
///
/// Commands are processed by the `apply()` function, which takes
/// ownership of the current state, executes the command, and returns a
/// new valid state together with the command's outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Toggle the datum extent mode of every grid visible in a view
    ToggleDatumExtent { view_id: String },
}
