//! Toggle command
//!
//! Usage: gridax toggle <VIEW> [--file <PATH>]
//!
//! Drives the same external command a host UI button would, with the
//! named view standing in as the active view.

use std::path::PathBuf;

use clap::Args;
use gridax_addin::{
    ConsoleDialogs, ExecutionResult, ExternalCommand, Session, ToggleGridExtents,
};

use crate::docfile;

#[derive(Debug, Args)]
pub struct ToggleArgs {
    /// View name or ID to toggle grids in
    pub view: String,

    /// Path of the document file
    #[arg(long, default_value = docfile::DEFAULT_DOC_PATH)]
    pub file: PathBuf,
}

/// Execute toggle command
pub fn execute(args: ToggleArgs) -> Result<(), Box<dyn std::error::Error>> {
    let doc = docfile::load(&args.file)?;
    let view_id = docfile::resolve_view_id(&doc, &args.view)?;
    let grid_count = doc.grids_in_view(&view_id)?.len();

    let mut session = Session::new(doc, view_id);
    match ToggleGridExtents.execute(&mut session, &ConsoleDialogs) {
        ExecutionResult::Succeeded => {
            docfile::save(&args.file, &session.document)?;
            println!("✓ Toggled {} grids in view '{}'", grid_count, args.view);
            Ok(())
        }
        ExecutionResult::Cancelled => {
            // The warning dialog was already shown; the document file is
            // left untouched and this is not a process failure.
            println!("Cancelled: view '{}' does not support datum extents", args.view);
            Ok(())
        }
        ExecutionResult::Failed => Err(format!("toggle failed in view '{}'", args.view).into()),
    }
}
