//! Seed command
//!
//! Usage: gridax seed [--file <PATH>] [--force]

use std::path::PathBuf;

use clap::Args;
use gridax_core::model::ViewKind;
use gridax_core::ops::{grid_ops, view_ops};
use gridax_core::Document;

use crate::docfile;

#[derive(Debug, Args)]
pub struct SeedArgs {
    /// Path of the document file to create
    #[arg(long, default_value = docfile::DEFAULT_DOC_PATH)]
    pub file: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Execute seed command
pub fn execute(args: SeedArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.file.exists() && !args.force {
        return Err(format!(
            "{} already exists (use --force to overwrite)",
            args.file.display()
        )
        .into());
    }

    let doc = sample_document()?;
    docfile::save(&args.file, &doc)?;

    println!(
        "✓ Seeded {} ({} views, {} grids)",
        args.file.display(),
        doc.list_views().len(),
        doc.list_grids().len()
    );
    Ok(())
}

/// Build the sample document: two datum-capable views, one 3D view the
/// policy denies, and four grids visible in all three
fn sample_document() -> Result<Document, Box<dyn std::error::Error>> {
    let mut doc = Document::new();

    let level_1 = view_ops::create_view(&mut doc, "Level 1".to_string(), ViewKind::FloorPlan)?;
    let section = view_ops::create_view(&mut doc, "Section A-A".to_string(), ViewKind::Section)?;
    let axo = view_ops::create_view(&mut doc, "Axo".to_string(), ViewKind::ThreeD)?;

    for name in ["1", "2", "A", "B"] {
        let grid_id = grid_ops::create_grid(&mut doc, name.to_string())?;
        for view_id in [&level_1, &section, &axo] {
            grid_ops::show_grid_in_view(&mut doc, &grid_id, view_id)?;
        }
    }

    Ok(doc)
}
