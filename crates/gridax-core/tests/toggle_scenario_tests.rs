//! Toggle scenario tests
//!
//! End-to-end scenarios for the datum extent toggle through the apply()
//! boundary:
//!
//! 1. Two-step idempotence in both directions
//! 2. Unrecognized modes are absorbing under repeated invocations
//! 3. Denied views change nothing and report cancelled
//! 4. Empty views commit an empty scope and report succeeded
//! 5. The mixed two-grid scenario and its full round trip

mod common;

use common::{create_test_grid, create_test_view, extent, new_document, set_extent};
use gridax_core::model::{DatumEnd, DatumExtentMode, ViewKind};
use gridax_core::policy::DatumViewPolicy;
use gridax_core::{apply, Command, CommandStatus, Document};

fn toggle(state: Document, view_id: &str) -> (Document, CommandStatus, usize) {
    let outcome = apply(
        state,
        Command::ToggleDatumExtent {
            view_id: view_id.to_string(),
        },
        &DatumViewPolicy,
    )
    .unwrap();
    (outcome.state, outcome.status, outcome.grids_processed)
}

#[test]
fn test_two_step_idempotence_from_model() {
    let mut doc = new_document();
    let view_id = create_test_view(&mut doc, "Level 1", ViewKind::FloorPlan);
    let grid_id = create_test_grid(&mut doc, "A", &[&view_id]);

    let (doc, status, _) = toggle(doc, &view_id);
    assert_eq!(status, CommandStatus::Succeeded);
    assert_eq!(
        extent(&doc, &grid_id, DatumEnd::End0, &view_id),
        DatumExtentMode::ViewSpecific
    );

    let (doc, _, _) = toggle(doc, &view_id);
    assert_eq!(
        extent(&doc, &grid_id, DatumEnd::End0, &view_id),
        DatumExtentMode::Model
    );
}

#[test]
fn test_two_step_idempotence_from_view_specific() {
    let mut doc = new_document();
    let view_id = create_test_view(&mut doc, "Level 1", ViewKind::FloorPlan);
    let grid_id = create_test_grid(&mut doc, "A", &[&view_id]);
    set_extent(
        &mut doc,
        &grid_id,
        DatumEnd::End0,
        &view_id,
        DatumExtentMode::ViewSpecific,
    );
    set_extent(
        &mut doc,
        &grid_id,
        DatumEnd::End1,
        &view_id,
        DatumExtentMode::ViewSpecific,
    );

    let (doc, _, _) = toggle(doc, &view_id);
    assert_eq!(
        extent(&doc, &grid_id, DatumEnd::End0, &view_id),
        DatumExtentMode::Model
    );
    assert_eq!(
        extent(&doc, &grid_id, DatumEnd::End1, &view_id),
        DatumExtentMode::Model
    );

    let (doc, _, _) = toggle(doc, &view_id);
    assert_eq!(
        extent(&doc, &grid_id, DatumEnd::End0, &view_id),
        DatumExtentMode::ViewSpecific
    );
    assert_eq!(
        extent(&doc, &grid_id, DatumEnd::End1, &view_id),
        DatumExtentMode::ViewSpecific
    );
}

#[test]
fn test_unrecognized_mode_is_absorbing() {
    let mut doc = new_document();
    let view_id = create_test_view(&mut doc, "Level 1", ViewKind::FloorPlan);
    let grid_id = create_test_grid(&mut doc, "A", &[&view_id]);
    set_extent(
        &mut doc,
        &grid_id,
        DatumEnd::End1,
        &view_id,
        DatumExtentMode::Other(99),
    );

    let mut doc = doc;
    for _ in 0..5 {
        let (next, status, _) = toggle(doc, &view_id);
        assert_eq!(status, CommandStatus::Succeeded);
        doc = next;
    }

    // End1 never moved; End0 flipped five times.
    assert_eq!(
        extent(&doc, &grid_id, DatumEnd::End1, &view_id),
        DatumExtentMode::Other(99)
    );
    assert_eq!(
        extent(&doc, &grid_id, DatumEnd::End0, &view_id),
        DatumExtentMode::ViewSpecific
    );
}

#[test]
fn test_denied_view_changes_nothing_and_cancels() {
    let mut doc = new_document();
    let view_id = create_test_view(&mut doc, "Axonometric", ViewKind::ThreeD);
    let grid_id = create_test_grid(&mut doc, "A", &[&view_id]);

    let (doc, status, processed) = toggle(doc, &view_id);

    assert_eq!(status, CommandStatus::Cancelled);
    assert_eq!(processed, 0);
    assert_eq!(
        extent(&doc, &grid_id, DatumEnd::End0, &view_id),
        DatumExtentMode::Model
    );
    assert_eq!(
        extent(&doc, &grid_id, DatumEnd::End1, &view_id),
        DatumExtentMode::Model
    );
}

#[test]
fn test_empty_view_commits_and_succeeds() {
    let mut doc = new_document();
    let view_id = create_test_view(&mut doc, "Level 2", ViewKind::FloorPlan);

    let (_, status, processed) = toggle(doc, &view_id);

    assert_eq!(status, CommandStatus::Succeeded);
    assert_eq!(processed, 0);
}

#[test]
fn test_mixed_two_grid_scenario_round_trips() {
    // Grid A: (End0=Model, End1=ViewSpecific)
    // Grid B: (End0=ViewSpecific, End1=ViewSpecific)
    let mut doc = new_document();
    let view_id = create_test_view(&mut doc, "Level 1", ViewKind::FloorPlan);
    let grid_a = create_test_grid(&mut doc, "A", &[&view_id]);
    let grid_b = create_test_grid(&mut doc, "B", &[&view_id]);

    set_extent(
        &mut doc,
        &grid_a,
        DatumEnd::End1,
        &view_id,
        DatumExtentMode::ViewSpecific,
    );
    set_extent(
        &mut doc,
        &grid_b,
        DatumEnd::End0,
        &view_id,
        DatumExtentMode::ViewSpecific,
    );
    set_extent(
        &mut doc,
        &grid_b,
        DatumEnd::End1,
        &view_id,
        DatumExtentMode::ViewSpecific,
    );

    // First invocation: A=(ViewSpecific, Model), B=(Model, Model).
    let (doc, status, processed) = toggle(doc, &view_id);
    assert_eq!(status, CommandStatus::Succeeded);
    assert_eq!(processed, 2);

    assert_eq!(
        extent(&doc, &grid_a, DatumEnd::End0, &view_id),
        DatumExtentMode::ViewSpecific
    );
    assert_eq!(
        extent(&doc, &grid_a, DatumEnd::End1, &view_id),
        DatumExtentMode::Model
    );
    assert_eq!(
        extent(&doc, &grid_b, DatumEnd::End0, &view_id),
        DatumExtentMode::Model
    );
    assert_eq!(
        extent(&doc, &grid_b, DatumEnd::End1, &view_id),
        DatumExtentMode::Model
    );

    // Second invocation restores the original configuration.
    let (doc, _, _) = toggle(doc, &view_id);

    assert_eq!(
        extent(&doc, &grid_a, DatumEnd::End0, &view_id),
        DatumExtentMode::Model
    );
    assert_eq!(
        extent(&doc, &grid_a, DatumEnd::End1, &view_id),
        DatumExtentMode::ViewSpecific
    );
    assert_eq!(
        extent(&doc, &grid_b, DatumEnd::End0, &view_id),
        DatumExtentMode::ViewSpecific
    );
    assert_eq!(
        extent(&doc, &grid_b, DatumEnd::End1, &view_id),
        DatumExtentMode::ViewSpecific
    );
}
