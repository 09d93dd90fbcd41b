use anyhow::Result;
use tracing_subscriber::EnvFilter;

use greet::cli::{self, ExecutionContext};

/// Diagnostics go to stderr; stdout belongs to command output.
fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_env("GREET_LOG").unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to install tracing subscriber: {error}"))
}

// The async entry point exists for host-runtime integration only;
// dispatch itself is synchronous.
#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;

    let registry = cli::builtin_registry();
    let ctx = ExecutionContext::new();
    let code = cli::run(&registry, &ctx, std::env::args_os());
    std::process::exit(code);
}
