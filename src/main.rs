use clap::Parser;

use deskapp::cli::{Cli, run};

/// Initialize the tracing subscriber for logging.
fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    // By default, only log from the deskapp crate at info level.
    // Users can override with the RUST_LOG environment variable.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("deskapp=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    deskapp::config::init_config();

    let cli = Cli::parse();
    run(cli)
}
