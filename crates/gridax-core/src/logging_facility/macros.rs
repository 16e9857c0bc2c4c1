//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log operations.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use gridax_core::log_op_start;
/// log_op_start!("toggle_grid_extents");
/// log_op_start!("toggle_grid_extents", view_id = "v123");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = gridax_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = gridax_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use gridax_core::log_op_end;
/// log_op_end!("toggle_grid_extents", duration_ms = 42);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = gridax_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = gridax_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// # Example
///
/// ```ignore
/// # use gridax_core::{log_op_error, errors::GridaxError};
/// let err = GridaxError::ViewNotFound { view_id: "v1".to_string() };
/// log_op_error!("toggle_grid_extents", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let err: &$crate::errors::GridaxError = &$err;
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = gridax_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_code = err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let err: &$crate::errors::GridaxError = &$err;
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = gridax_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_code = err.code(),
            $($field)*
        );
    }};
}
