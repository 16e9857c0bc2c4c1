//! Ribbon registry
//!
//! A lightweight stand-in for the host's ribbon API: tabs hold panels,
//! panels hold push buttons, and each button is wired to an
//! `ExternalCommand` by ID. The host-API quirk that creating an existing
//! tab or panel is not an error is preserved, so startup can run twice
//! (or alongside sibling add-ins) without special-casing.

use std::collections::HashMap;

use crate::command::{ExecutionResult, ExternalCommand};
use crate::dialogs::Dialogs;
use crate::session::Session;

/// Data describing one push button on a ribbon panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushButtonData {
    /// Stable button ID, also the key the command is registered under
    pub id: String,
    /// Button label; may contain a newline for two-row ribbon text
    pub label: String,
    /// Hover tooltip
    pub tooltip: String,
    /// Small icon resource name
    pub image_name: String,
    /// Large icon resource name
    pub large_image_name: String,
}

/// A named panel holding push buttons
#[derive(Debug, Clone, Default)]
pub struct RibbonPanel {
    pub name: String,
    pub buttons: Vec<PushButtonData>,
}

/// A named ribbon tab holding panels
#[derive(Debug, Clone, Default)]
pub struct RibbonTab {
    pub name: String,
    pub panels: Vec<RibbonPanel>,
}

/// Registry of ribbon UI plus the commands behind its buttons
#[derive(Default)]
pub struct UiRegistry {
    tabs: Vec<RibbonTab>,
    commands: HashMap<String, Box<dyn ExternalCommand>>,
}

impl UiRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tab; a no-op if it already exists
    pub fn create_tab(&mut self, name: &str) {
        if !self.tabs.iter().any(|t| t.name == name) {
            self.tabs.push(RibbonTab {
                name: name.to_string(),
                panels: Vec::new(),
            });
        }
    }

    /// Create a panel on a tab; creates the tab as needed, no-op if the
    /// panel already exists
    pub fn create_panel(&mut self, tab_name: &str, panel_name: &str) {
        self.create_tab(tab_name);
        let tab = self
            .tabs
            .iter_mut()
            .find(|t| t.name == tab_name)
            .expect("tab was just created");
        if !tab.panels.iter().any(|p| p.name == panel_name) {
            tab.panels.push(RibbonPanel {
                name: panel_name.to_string(),
                buttons: Vec::new(),
            });
        }
    }

    /// Add a push button to a panel and wire it to a command
    ///
    /// Creates the tab and panel as needed. The button's `id` becomes
    /// the invocation key; re-adding an existing ID replaces the button
    /// data and command rather than duplicating the button.
    pub fn add_button(
        &mut self,
        tab_name: &str,
        panel_name: &str,
        data: PushButtonData,
        command: Box<dyn ExternalCommand>,
    ) {
        self.create_panel(tab_name, panel_name);
        let button_id = data.id.clone();
        let panel = self
            .tabs
            .iter_mut()
            .find(|t| t.name == tab_name)
            .and_then(|t| t.panels.iter_mut().find(|p| p.name == panel_name))
            .expect("panel was just created");
        match panel.buttons.iter_mut().find(|b| b.id == data.id) {
            Some(existing) => *existing = data,
            None => panel.buttons.push(data),
        }
        self.commands.insert(button_id, command);
    }

    /// Look up a button's data by ID
    pub fn button(&self, button_id: &str) -> Option<&PushButtonData> {
        self.tabs
            .iter()
            .flat_map(|t| &t.panels)
            .flat_map(|p| &p.buttons)
            .find(|b| b.id == button_id)
    }

    /// All registered tabs
    pub fn tabs(&self) -> &[RibbonTab] {
        &self.tabs
    }

    /// Invoke the command behind a button
    ///
    /// Returns `None` for an unknown button ID.
    pub fn invoke(
        &self,
        button_id: &str,
        session: &mut Session,
        dialogs: &dyn Dialogs,
    ) -> Option<ExecutionResult> {
        self.commands
            .get(button_id)
            .map(|cmd| cmd.execute(session, dialogs))
    }
}
