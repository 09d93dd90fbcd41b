use clap::{Arg, ArgMatches, Command};

use crate::cli::context::ExecutionContext;
use crate::core::error::DispatchError;

/// Handler signature shared by every registered command.
///
/// Plain function pointer rather than a trait object: a command owns
/// no state, so there is nothing for a struct to carry.
pub type Handler = fn(&ArgMatches, &ExecutionContext) -> Result<i32, DispatchError>;

/// Descriptor for a single positional parameter.
#[derive(Debug, Clone)]
pub struct ParamSpec {
    pub name: &'static str,
    /// Zero-based position on the command line.
    pub index: usize,
    pub required: bool,
    pub help: &'static str,
}

/// Full description of one command: name, help, parameter schema and
/// the handler to invoke once parsing succeeds.
#[derive(Debug)]
pub struct CommandSpec {
    pub name: &'static str,
    pub about: &'static str,
    pub params: Vec<ParamSpec>,
    pub handler: Handler,
}

impl CommandSpec {
    /// Lower the parameter descriptors into a `clap` command.
    ///
    /// The schema stays plain data; clap does the actual parsing and
    /// renders usage and help text from it.
    pub fn to_clap_command(&self) -> Command {
        let mut command = Command::new(self.name)
            .about(self.about)
            .version(env!("CARGO_PKG_VERSION"));

        for param in &self.params {
            command = command.arg(
                Arg::new(param.name)
                    // clap positional indices are one-based
                    .index(param.index + 1)
                    .required(param.required)
                    .help(param.help),
            );
        }

        command
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop_handler(
        _matches: &ArgMatches,
        _ctx: &ExecutionContext,
    ) -> Result<i32, DispatchError> {
        Ok(0)
    }

    fn probe_spec() -> CommandSpec {
        CommandSpec {
            name: "probe",
            about: "Probe command for schema tests",
            params: vec![ParamSpec {
                name: "target",
                index: 0,
                required: true,
                help: "The target value",
            }],
            handler: noop_handler,
        }
    }

    #[test]
    fn required_positional_rejects_empty_args() {
        let result = probe_spec().to_clap_command().try_get_matches_from(["probe"]);
        assert!(result.is_err());
    }

    #[test]
    fn required_positional_accepts_one_value() {
        let matches = probe_spec()
            .to_clap_command()
            .try_get_matches_from(["probe", "value"])
            .unwrap();
        assert_eq!(
            matches.get_one::<String>("target").map(String::as_str),
            Some("value")
        );
    }

    #[test]
    fn extra_positional_is_rejected() {
        let result = probe_spec()
            .to_clap_command()
            .try_get_matches_from(["probe", "one", "two"]);
        assert!(result.is_err());
    }

    #[test]
    fn command_spec_is_debug_printable() {
        // assertion helpers like unwrap_err rely on this
        let rendered = format!("{:?}", probe_spec());
        assert!(rendered.contains("probe"));
    }

    #[test]
    fn help_text_reaches_clap() {
        let command = probe_spec().to_clap_command();
        let arg = command
            .get_arguments()
            .find(|arg| arg.get_id().as_str() == "target")
            .unwrap();
        assert_eq!(
            arg.get_help().map(ToString::to_string),
            Some("The target value".to_string())
        );
    }
}
