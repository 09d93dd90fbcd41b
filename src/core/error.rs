// Custom error types for argument parsing and command dispatch

use thiserror::Error;

/// Exit code for a successful run.
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for malformed or missing arguments (EX_USAGE).
pub const EXIT_USAGE: i32 = 64;

/// Errors produced before a command handler runs.
///
/// Every variant is terminal for the run: there is no retry and no
/// partial execution.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("usage error: {message}")]
    Usage { message: String },

    #[error("unknown command: {name}")]
    UnknownCommand { name: String },
}

impl DispatchError {
    /// Process exit code this error maps to.
    pub fn exit_code(&self) -> i32 {
        match self {
            DispatchError::Usage { .. } => EXIT_USAGE,
            DispatchError::UnknownCommand { .. } => EXIT_USAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_error_maps_to_ex_usage() {
        let error = DispatchError::Usage {
            message: "missing required argument <name>".to_string(),
        };
        assert_eq!(error.exit_code(), EXIT_USAGE);
        assert_eq!(
            error.to_string(),
            "usage error: missing required argument <name>"
        );
    }

    #[test]
    fn unknown_command_maps_to_ex_usage() {
        let error = DispatchError::UnknownCommand {
            name: "frobnicate".to_string(),
        };
        assert_eq!(error.exit_code(), EXIT_USAGE);
        assert_eq!(error.to_string(), "unknown command: frobnicate");
    }
}
