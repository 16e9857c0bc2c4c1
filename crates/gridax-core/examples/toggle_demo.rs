//! Toggle API Demonstration
//!
//! This example demonstrates the functional-boundary `apply()` API for the
//! datum extent toggle.
#![allow(clippy::unwrap_used, clippy::expect_used)]
//!
//! Key concepts illustrated:
//! 1. Immutable state threading (apply returns new state)
//! 2. The view policy guard and the cancelled outcome
//! 3. Two-step idempotence of the toggle

use gridax_core::model::{DatumEnd, ViewKind};
use gridax_core::ops::{grid_ops, view_ops};
use gridax_core::policy::DatumViewPolicy;
use gridax_core::{apply, Command, CommandStatus, Document};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Gridax Toggle Demo ===\n");

    // ===== Part 1: Build a document =====
    let mut state = Document::new();
    let plan_id = view_ops::create_view(&mut state, "Level 1".to_string(), ViewKind::FloorPlan)?;
    let three_d_id = view_ops::create_view(&mut state, "Axo".to_string(), ViewKind::ThreeD)?;

    for name in ["A", "B", "C"] {
        let grid_id = grid_ops::create_grid(&mut state, name.to_string())?;
        grid_ops::show_grid_in_view(&mut state, &grid_id, &plan_id)?;
        grid_ops::show_grid_in_view(&mut state, &grid_id, &three_d_id)?;
    }
    println!("Created 2 views and {} grids", state.list_grids().len());

    let policy = DatumViewPolicy;

    // ===== Part 2: Toggle in a permitted view =====
    let cmd = Command::ToggleDatumExtent {
        view_id: plan_id.clone(),
    };
    let outcome = apply(state, cmd, &policy)?;
    println!(
        "✓ Toggled {} grids in 'Level 1' ({:?})",
        outcome.grids_processed, outcome.status
    );

    let state = outcome.state;
    for grid in state.grids_in_view(&plan_id)? {
        let pair = grid.extents_in_view(&plan_id).unwrap();
        println!(
            "  grid {}: end0={} end1={}",
            grid.name,
            pair.end(DatumEnd::End0),
            pair.end(DatumEnd::End1)
        );
    }

    // ===== Part 3: The guard cancels in a 3D view =====
    let cmd = Command::ToggleDatumExtent {
        view_id: three_d_id.clone(),
    };
    let outcome = apply(state, cmd, &policy)?;
    assert_eq!(outcome.status, CommandStatus::Cancelled);
    println!("\n✓ Toggle in 'Axo' was cancelled by the view policy");

    // ===== Part 4: Toggling twice restores the original modes =====
    let state = outcome.state;
    let outcome = apply(
        state,
        Command::ToggleDatumExtent {
            view_id: plan_id.clone(),
        },
        &policy,
    )?;
    let state = outcome.state;
    let first = state.grids_in_view(&plan_id)?[0];
    println!(
        "\n✓ Second toggle restored grid {} to end0={}",
        first.name,
        first.extents_in_view(&plan_id).unwrap().end(DatumEnd::End0)
    );

    Ok(())
}
