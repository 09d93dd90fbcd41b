use std::ffi::OsString;

use clap::error::ErrorKind;
use tracing::debug;

use crate::cli::context::ExecutionContext;
use crate::cli::registry::CommandRegistry;
use crate::core::error::{EXIT_SUCCESS, EXIT_USAGE};

/// Parse the raw argument list and run the registry's default command.
///
/// `args` must include the program name at position 0, matching what
/// `std::env::args_os` yields. Returns the process exit code: 0 on
/// success, 64 on a usage error, the handler's code otherwise.
pub fn run<I, T>(registry: &CommandRegistry, ctx: &ExecutionContext, args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let spec = match registry.default_command() {
        Ok(spec) => spec,
        Err(error) => {
            eprintln!("{error}");
            return error.exit_code();
        }
    };

    let matches = match spec.to_clap_command().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(error) => {
            // Help and version requests terminate successfully; any
            // other parse failure is a usage error and the handler
            // never runs.
            let code = match error.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => EXIT_SUCCESS,
                _ => EXIT_USAGE,
            };
            // clap routes help to stdout and diagnostics to stderr.
            let _ = error.print();
            return code;
        }
    };

    debug!(command = spec.name, "dispatching");
    match (spec.handler)(&matches, ctx) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{error}");
            error.exit_code()
        }
    }
}
