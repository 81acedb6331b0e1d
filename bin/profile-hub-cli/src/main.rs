mod app;
mod cli;
mod cli_command;
mod session_file;
mod state;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let config = cli.client_config()?;

    tracing_subscriber::fmt::Subscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .without_time()
        .init();
    info!("Starting profile CLI");

    app::run(config, cli.storage_path).await
}
