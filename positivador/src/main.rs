// positivador/src/main.rs

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG=debug positivador metrics ... to see the generated SQL.
    // Logs go to stderr so that JSON/CSV on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config.as_deref();
    let db_path = cli.db_path;

    match cli.command {
        Commands::Tables { limit, json } => {
            commands::tables::execute(config, db_path, limit, json).await
        }
        Commands::Advisors { json } => commands::advisors::execute(config, db_path, json).await,
        Commands::Metrics {
            limit,
            advisors,
            output,
        } => commands::metrics::execute(config, db_path, limit, advisors, output).await,
        Commands::Export {
            limit,
            advisors,
            output,
        } => commands::export::execute(config, db_path, limit, advisors, output).await,
        Commands::Health => commands::health::execute(config, db_path).await,
    }
}
