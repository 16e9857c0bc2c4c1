//! Add-in entry points
//!
//! The host calls `on_startup` once with its UI registry and
//! `on_shutdown` when closing. Startup registers the single toggle
//! button; there is nothing to tear down.

use crate::command::{ExecutionResult, ToggleGridExtents};
use crate::ribbon::{PushButtonData, UiRegistry};

/// Ribbon tab all Gridax buttons live under
pub const TAB_NAME: &str = "Gridax";

/// Panel name for editing instruments
pub const PANEL_INSTRUMENTS: &str = "Instruments";

/// Button ID of the toggle command
pub const BUTTON_TOGGLE_GRID_EXTENTS: &str = "gridax.toggle_grid_extents";

/// The add-in itself
#[derive(Debug, Clone, Copy, Default)]
pub struct GridaxAddin;

impl GridaxAddin {
    /// Register the ribbon UI when the host starts
    pub fn on_startup(&self, registry: &mut UiRegistry) -> ExecutionResult {
        registry.create_tab(TAB_NAME);
        registry.create_panel(TAB_NAME, PANEL_INSTRUMENTS);

        let button = PushButtonData {
            id: BUTTON_TOGGLE_GRID_EXTENTS.to_string(),
            label: "Toggle grid\nextent mode".to_string(),
            tooltip: "Toggles the extent mode of the grids in the active view \
                      between model and view-specific."
                .to_string(),
            image_name: "icon_gridax_toggle_16x16.png".to_string(),
            large_image_name: "icon_gridax_toggle_32x32.png".to_string(),
        };
        registry.add_button(
            TAB_NAME,
            PANEL_INSTRUMENTS,
            button,
            Box::new(ToggleGridExtents),
        );

        ExecutionResult::Succeeded
    }

    /// Host shutdown hook; nothing to release
    pub fn on_shutdown(&self) -> ExecutionResult {
        ExecutionResult::Succeeded
    }
}
