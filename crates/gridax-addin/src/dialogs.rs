use std::cell::RefCell;

/// Dialog seam for the add-in's user-facing messages
///
/// The toggle command has exactly one dialog: the warning shown when the
/// active view does not support datum extents. Everything else is
/// silent.
pub trait Dialogs {
    /// Show a modal warning with a title and message
    fn warn(&self, title: &str, message: &str);
}

/// Dialogs backed by the log stream, for headless hosts
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleDialogs;

impl Dialogs for ConsoleDialogs {
    fn warn(&self, title: &str, message: &str) {
        tracing::warn!(dialog = "warn", title, "{}", message);
        eprintln!("{}: {}", title, message);
    }
}

/// Dialogs that record every warning, for test assertions
#[derive(Debug, Default)]
pub struct RecordingDialogs {
    warnings: RefCell<Vec<(String, String)>>,
}

impl RecordingDialogs {
    /// Create a new empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// All warnings shown so far, as (title, message) pairs
    pub fn warnings(&self) -> Vec<(String, String)> {
        self.warnings.borrow().clone()
    }
}

impl Dialogs for RecordingDialogs {
    fn warn(&self, title: &str, message: &str) {
        self.warnings
            .borrow_mut()
            .push((title.to_string(), message.to_string()));
    }
}
