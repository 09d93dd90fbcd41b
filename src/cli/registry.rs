use std::collections::BTreeMap;

use crate::cli::commands;
use crate::cli::schema::CommandSpec;
use crate::core::error::DispatchError;

/// Command table keyed by command name.
///
/// The first command registered becomes the default: the CLI surface
/// takes no subcommand word, so the dispatcher runs the default
/// command against the whole argument list.
pub struct CommandRegistry {
    commands: BTreeMap<&'static str, CommandSpec>,
    default: Option<&'static str>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: BTreeMap::new(),
            default: None,
        }
    }

    pub fn register(&mut self, spec: CommandSpec) {
        if self.default.is_none() {
            self.default = Some(spec.name);
        }
        self.commands.insert(spec.name, spec);
    }

    pub fn get(&self, name: &str) -> Result<&CommandSpec, DispatchError> {
        self.commands
            .get(name)
            .ok_or_else(|| DispatchError::UnknownCommand {
                name: name.to_string(),
            })
    }

    pub fn default_command(&self) -> Result<&CommandSpec, DispatchError> {
        let name = self.default.ok_or_else(|| DispatchError::UnknownCommand {
            name: "(default)".to_string(),
        })?;
        self.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry with every shipped command installed.
pub fn builtin_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.register(commands::greet::command_spec());
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_defaults_to_greet() {
        let registry = builtin_registry();
        assert_eq!(registry.default_command().unwrap().name, "greet");
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["greet"]);
    }

    #[test]
    fn lookup_by_name_finds_registered_command() {
        let registry = builtin_registry();
        assert_eq!(registry.get("greet").unwrap().name, "greet");
    }

    #[test]
    fn unknown_name_is_an_error() {
        let registry = builtin_registry();
        let error = registry.get("frobnicate").unwrap_err();
        assert!(matches!(
            error,
            DispatchError::UnknownCommand { ref name } if name == "frobnicate"
        ));
    }

    #[test]
    fn empty_registry_has_no_default() {
        let registry = CommandRegistry::new();
        assert!(registry.default_command().is_err());
    }
}
