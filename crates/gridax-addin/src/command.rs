//! External command boundary
//!
//! Commands at this layer are what the host invokes from UI buttons.
//! Each wraps a core `apply()` call with:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success or cancellation
//! - `log_op_error!` on failure
//! and translates the outcome into the host-facing `ExecutionResult`.

use std::time::Instant;

use gridax_core::policy::DatumViewPolicy;
use gridax_core::{apply, Command, CommandStatus};
use gridax_core::{log_op_end, log_op_error, log_op_start};
use gridax_core_types::RequestContext;

use crate::dialogs::Dialogs;
use crate::session::Session;

/// Fixed title of the unsupported-view warning dialog
pub const WARN_TITLE: &str = "Warning";

/// Fixed message of the unsupported-view warning dialog
pub const WARN_UNSUPPORTED_VIEW: &str = "This tool cannot be used in the active view";

/// Result of executing an external command, as reported to the host
///
/// `Cancelled` tells the host the user-visible state is unchanged on
/// purpose; `Failed` tells it to surface its own error reporting. Either
/// way the session document is left as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionResult {
    Succeeded,
    Cancelled,
    Failed,
}

/// A command the host can wire to a UI button
pub trait ExternalCommand {
    /// Stable command name, used for logging and button wiring
    fn name(&self) -> &'static str;

    /// Run the command against the session
    fn execute(&self, session: &mut Session, dialogs: &dyn Dialogs) -> ExecutionResult;
}

/// Toggle the datum extent mode of the grids in the active view
///
/// The add-in's one command: flips every visible grid's extents between
/// model and view-specific, both ends independently, inside a single
/// edit scope. Denied views produce the fixed warning dialog and a
/// cancelled result.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToggleGridExtents;

impl ExternalCommand for ToggleGridExtents {
    fn name(&self) -> &'static str {
        "toggle_grid_extents"
    }

    fn execute(&self, session: &mut Session, dialogs: &dyn Dialogs) -> ExecutionResult {
        let ctx = RequestContext::new();
        let view_id = session.active_view_id.clone();
        log_op_start!(
            "toggle_grid_extents",
            request_id = ctx.request_id.as_str(),
            view_id = view_id.as_str()
        );
        let start = Instant::now();

        let cmd = Command::ToggleDatumExtent {
            view_id: view_id.clone(),
        };

        // apply() consumes its input, so hand it a clone; the session
        // keeps the prior state until the command is known to succeed.
        match apply(session.document.clone(), cmd, &DatumViewPolicy) {
            Ok(outcome) => match outcome.status {
                CommandStatus::Succeeded => {
                    session.document = outcome.state;
                    log_op_end!(
                        "toggle_grid_extents",
                        duration_ms = start.elapsed().as_millis() as u64,
                        request_id = ctx.request_id.as_str(),
                        view_id = view_id.as_str(),
                        grid_count = outcome.grids_processed as u64
                    );
                    ExecutionResult::Succeeded
                }
                CommandStatus::Cancelled => {
                    dialogs.warn(WARN_TITLE, WARN_UNSUPPORTED_VIEW);
                    log_op_end!(
                        "toggle_grid_extents",
                        duration_ms = start.elapsed().as_millis() as u64,
                        request_id = ctx.request_id.as_str(),
                        view_id = view_id.as_str(),
                        status = "cancelled"
                    );
                    ExecutionResult::Cancelled
                }
            },
            Err(err) => {
                log_op_error!(
                    "toggle_grid_extents",
                    err,
                    duration_ms = start.elapsed().as_millis() as u64,
                    request_id = ctx.request_id.as_str(),
                    view_id = view_id.as_str()
                );
                ExecutionResult::Failed
            }
        }
    }
}
