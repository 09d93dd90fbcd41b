pub mod cli;
pub mod core;

pub use self::cli::{builtin_registry, run, CommandRegistry, ExecutionContext};
pub use self::core::error::{DispatchError, EXIT_SUCCESS, EXIT_USAGE};
