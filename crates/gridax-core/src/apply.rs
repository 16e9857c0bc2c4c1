//! Functional-boundary apply function
//!
//! This module provides the `apply()` function, the canonical entry point
//! for document mutations in the functional-boundary style.
//!
//! ## Atomicity Contract
//!
//! The `apply()` function guarantees:
//! - **All-or-nothing**: Either the command succeeds as a whole and
//!   returns a valid new state, or it fails and the caller's prior state
//!   remains the valid one
//! - **No panics**: Invalid input returns typed errors
//! - **Guard before scope**: A view denied by the policy produces a
//!   `Cancelled` outcome before any edit scope is opened; cancellation
//!   is not an error
//!
//! ## Example
//!
//! ```
//! use gridax_core::{apply, Command, CommandStatus, Document};
//! use gridax_core::model::ViewKind;
//! use gridax_core::ops::view_ops;
//! use gridax_core::policy::DatumViewPolicy;
//!
//! let mut state = Document::new();
//! let view_id = view_ops::create_view(&mut state, "Level 1".into(), ViewKind::FloorPlan).unwrap();
//!
//! let cmd = Command::ToggleDatumExtent { view_id };
//! let outcome = apply(state, cmd, &DatumViewPolicy).unwrap();
//! assert_eq!(outcome.status, CommandStatus::Succeeded);
//! ```

use crate::commands::Command;
use crate::errors::Result;
use crate::ops::{extent_ops, Document};
use crate::policy::ViewPolicy;
use crate::rules::validation;

/// Outcome status of a processed command
///
/// `Cancelled` is the guard-denied path: the document was not touched
/// and the caller is expected to tell the user why. It is deliberately
/// not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Succeeded,
    Cancelled,
}

/// Result of applying a command: the new state plus what happened
#[derive(Debug, Clone)]
pub struct ApplyOutcome {
    /// The document state after the command
    pub state: Document,
    /// Whether the command ran or was cancelled by the view policy
    pub status: CommandStatus,
    /// Number of grids the command processed (0 when cancelled)
    pub grids_processed: usize,
}

/// Apply a command to a document, returning the new state and outcome
///
/// This is the functional-boundary entry point for all mutations. It
/// takes ownership of the current state, executes the command inside a
/// single edit scope, and returns either the new valid state or an
/// error.
///
/// # Atomicity Guarantee
///
/// If this function returns `Ok`, the outcome's state is structurally
/// valid (it passes [`validation::validate_document`]). If it returns
/// `Err`, no partial mutation escapes: the state the caller kept (or
/// cloned) before the call remains the valid one.
///
/// # Arguments
///
/// * `state` - Current document state (ownership transferred)
/// * `cmd` - Command to execute
/// * `policy` - View policy guarding datum extent edits
///
/// # Errors
///
/// Returns an error if the command references an unknown view or the
/// mutated document fails validation. A policy-denied view is NOT an
/// error; it yields `CommandStatus::Cancelled` with the state unchanged.
pub fn apply(mut state: Document, cmd: Command, policy: &dyn ViewPolicy) -> Result<ApplyOutcome> {
    match cmd {
        Command::ToggleDatumExtent { view_id } => {
            let permitted = policy.permits_datum_edit(state.get_view(&view_id)?);
            if !permitted {
                return Ok(ApplyOutcome {
                    state,
                    status: CommandStatus::Cancelled,
                    grids_processed: 0,
                });
            }

            let grids_processed = extent_ops::toggle_view_extents(&mut state, &view_id)?;
            validation::validate_document(&state)?;

            Ok(ApplyOutcome {
                state,
                status: CommandStatus::Succeeded,
                grids_processed,
            })
        }
    }
}
