use clap::ArgMatches;

use crate::cli::context::ExecutionContext;
use crate::cli::schema::{CommandSpec, ParamSpec};
use crate::core::error::{DispatchError, EXIT_SUCCESS};

/// Parsed settings for the greet command.
///
/// Built fresh from the matches on every invocation and dropped when
/// the handler returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetSettings {
    pub name: String,
}

impl GreetSettings {
    /// clap already enforces the required positional, so a missing
    /// value here means the schema and this struct disagree.
    fn from_matches(matches: &ArgMatches) -> Result<Self, DispatchError> {
        let name = matches
            .get_one::<String>("name")
            .ok_or_else(|| DispatchError::Usage {
                message: "missing required argument <name>".to_string(),
            })?
            .clone();
        Ok(Self { name })
    }
}

/// Schema and handler for `greet <name>`.
pub fn command_spec() -> CommandSpec {
    CommandSpec {
        name: "greet",
        about: "Greets the person named on the command line",
        params: vec![ParamSpec {
            name: "name",
            index: 0,
            required: true,
            help: "The name to greet",
        }],
        handler: execute,
    }
}

/// Emit the greeting line and report success.
pub fn execute(matches: &ArgMatches, ctx: &ExecutionContext) -> Result<i32, DispatchError> {
    let settings = GreetSettings::from_matches(matches)?;
    ctx.console()
        .print_line(&format!("Hello, {}!", settings.name));
    Ok(EXIT_SUCCESS)
}
