//! CLI toggle integration tests
//!
//! These tests verify that the CLI toggle command correctly delegates to
//! the add-in's external command and persists the result.

use std::path::{Path, PathBuf};
use std::process::Command;

use gridax_core::model::{DatumEnd, DatumExtentMode};
use gridax_core::Document;
use tempfile::TempDir;

fn cli_bin() -> &'static str {
    env!("CARGO_BIN_EXE_gridax-cli")
}

fn seed(temp_dir: &TempDir) -> PathBuf {
    let doc_path = temp_dir.path().join("document.json");
    let output = Command::new(cli_bin())
        .current_dir(temp_dir.path())
        .args(["seed", "--file", doc_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute CLI");
    assert!(
        output.status.success(),
        "seed should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    doc_path
}

fn load_doc(path: &Path) -> Document {
    let data = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&data).unwrap()
}

fn plan_extents(doc: &Document) -> Vec<(String, DatumExtentMode, DatumExtentMode)> {
    let view = doc.find_view_by_name("Level 1").unwrap();
    doc.grids_in_view(&view.id)
        .unwrap()
        .into_iter()
        .map(|g| {
            let pair = g.extents_in_view(&view.id).unwrap();
            (
                g.name.clone(),
                pair.end(DatumEnd::End0),
                pair.end(DatumEnd::End1),
            )
        })
        .collect()
}

#[test]
fn test_cli_toggle_flips_and_round_trips() {
    // Scenario: seed, toggle the floor plan, toggle it again
    // Then: first toggle flips every end, second restores the seed state

    let temp_dir = TempDir::new().unwrap();
    let doc_path = seed(&temp_dir);
    let seeded = plan_extents(&load_doc(&doc_path));

    let output = Command::new(cli_bin())
        .current_dir(temp_dir.path())
        .args(["toggle", "Level 1", "--file", doc_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute CLI");
    assert!(
        output.status.success(),
        "toggle should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Toggled 4 grids"));

    let toggled = plan_extents(&load_doc(&doc_path));
    for (name, end0, end1) in &toggled {
        assert_eq!(*end0, DatumExtentMode::ViewSpecific, "grid {} end0", name);
        assert_eq!(*end1, DatumExtentMode::ViewSpecific, "grid {} end1", name);
    }

    let output = Command::new(cli_bin())
        .current_dir(temp_dir.path())
        .args(["toggle", "Level 1", "--file", doc_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute CLI");
    assert!(output.status.success());

    assert_eq!(plan_extents(&load_doc(&doc_path)), seeded);
}

#[test]
fn test_cli_toggle_in_3d_view_cancels_and_leaves_file_untouched() {
    // Scenario: toggle against the seeded 3D view
    // Then: exit code 0, cancellation message, document bytes unchanged

    let temp_dir = TempDir::new().unwrap();
    let doc_path = seed(&temp_dir);
    let before = std::fs::read_to_string(&doc_path).unwrap();

    let output = Command::new(cli_bin())
        .current_dir(temp_dir.path())
        .args(["toggle", "Axo", "--file", doc_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute CLI");

    assert!(
        output.status.success(),
        "cancellation is not a process failure. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Cancelled"));

    let after = std::fs::read_to_string(&doc_path).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_cli_toggle_unknown_view_fails() {
    let temp_dir = TempDir::new().unwrap();
    let doc_path = seed(&temp_dir);

    let output = Command::new(cli_bin())
        .current_dir(temp_dir.path())
        .args(["toggle", "Level 99", "--file", doc_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute CLI");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Level 99"));
}

#[test]
fn test_cli_show_prints_extent_modes() {
    let temp_dir = TempDir::new().unwrap();
    let doc_path = seed(&temp_dir);

    let output = Command::new(cli_bin())
        .current_dir(temp_dir.path())
        .args(["show", "Level 1", "--file", doc_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute CLI");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Level 1"));
    assert!(stdout.contains("model"));
}
