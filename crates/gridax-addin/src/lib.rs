//! Gridax add-in shell
//!
//! The pieces a host application would drive directly: the external
//! command boundary, the ribbon/button registry populated at startup,
//! the dialog seam for the one user-facing warning, and the session
//! holding the document and active view between invocations.

pub mod app;
pub mod command;
pub mod dialogs;
pub mod ribbon;
pub mod session;

pub use app::GridaxAddin;
pub use command::{ExecutionResult, ExternalCommand, ToggleGridExtents};
pub use dialogs::{ConsoleDialogs, Dialogs, RecordingDialogs};
pub use ribbon::{PushButtonData, UiRegistry};
pub use session::Session;
