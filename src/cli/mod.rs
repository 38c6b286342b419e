pub mod commands;
pub mod countdown;
pub mod init;
pub mod serve;
pub mod task;

pub use commands::*;

use crate::error::TaskError;
use crate::output;

/// Print `err` the way the active output mode expects and return exit code 1.
pub(crate) fn report(err: &TaskError, json_output: bool) -> i32 {
    if json_output {
        output::json::print(&output::json::error(err));
    } else {
        eprintln!("Error: {}", err.message);
    }
    1
}

/// Swap in the user-facing message the client recorded, if any.
pub(crate) fn user_facing(recorded: Option<String>, cause: TaskError) -> TaskError {
    match recorded {
        Some(message) => TaskError::new(cause.code, message),
        None => cause,
    }
}
