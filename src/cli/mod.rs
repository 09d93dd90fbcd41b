// CLI layer - argument schema, command table and dispatch
// Bridges the raw process argument list and the command handlers

pub mod commands;
pub mod console;
pub mod context;
pub mod dispatch;
pub mod registry;
pub mod schema;

pub use console::*;
pub use context::*;
pub use dispatch::*;
pub use registry::*;
pub use schema::*;
