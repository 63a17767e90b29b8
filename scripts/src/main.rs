use clap::Parser;
use scripts::{cli::Cli, constants::DEFAULT_LOG_FILTER, errors::ScriptError};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    let Cli {
        artifacts_dir,
        command,
    } = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    command.run(&artifacts_dir).await
}
