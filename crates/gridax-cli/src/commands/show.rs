//! Show command
//!
//! Usage: gridax show <VIEW> [--file <PATH>]

use std::path::PathBuf;

use clap::Args;
use gridax_core::model::DatumEnd;

use crate::docfile;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// View name or ID to inspect
    pub view: String,

    /// Path of the document file
    #[arg(long, default_value = docfile::DEFAULT_DOC_PATH)]
    pub file: PathBuf,
}

/// Execute show command
pub fn execute(args: ShowArgs) -> Result<(), Box<dyn std::error::Error>> {
    let doc = docfile::load(&args.file)?;
    let view_id = docfile::resolve_view_id(&doc, &args.view)?;
    let view = doc.get_view(&view_id)?;

    println!("View '{}' ({})", view.name, view.kind);
    let grids = doc.grids_in_view(&view_id)?;
    if grids.is_empty() {
        println!("  no grids visible");
        return Ok(());
    }

    for grid in grids {
        let Some(pair) = grid.extents_in_view(&view_id) else {
            continue;
        };
        println!(
            "  grid {:<4} end0={:<14} end1={}",
            grid.name,
            pair.end(DatumEnd::End0).to_string(),
            pair.end(DatumEnd::End1)
        );
    }
    Ok(())
}
