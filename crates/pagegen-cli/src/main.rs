//! pagegen CLI - documentation page generation
//!
//! Entry point for the `pagegen` command-line interface. Command
//! implementations live in separate modules under `commands`.

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod cli;
mod commands;
mod utils;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_logging(&cli)?;
    execute_command(cli).await
}

fn initialize_logging(cli: &Cli) -> Result<()> {
    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

async fn execute_command(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::TypePage { database_id } => {
            commands::publish_type(database_id, cli.quiet).await?;
        },

        Commands::LinkPages {
            database_id,
            skip_completions,
        } => {
            commands::publish_links(database_id, skip_completions, cli.quiet).await?;
        },

        Commands::Wait { milliseconds } => {
            commands::wait(milliseconds).await?;
        },
    }

    Ok(())
}
