use anyhow::{Context, Result};
use clap::Parser;
use pantry::cli::{
    commands::{
        grocery::GroceryCommand, search::SearchCommand, show::ShowCommand,
        suggest::SuggestCommand, CommandHandler,
    },
    Cli, Commands, LogLevel,
};
use std::io::IsTerminal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn initialize_tracing(log_level: LogLevel) {
    // RUST_LOG wins over --log-level when set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_tracing(cli.log_level);

    let command = cli.command_or_default();
    let name = command.name();
    debug!(command = name, "Running command");

    let handler: Box<dyn CommandHandler> = match command {
        Commands::Suggest {
            have,
            format,
            keep_blank,
        } => Box::new(SuggestCommand::new(cli.catalog, have, format, keep_blank)),
        Commands::Search { query, format } => {
            Box::new(SearchCommand::new(cli.catalog, query, format))
        }
        Commands::Grocery {
            have,
            format,
            keep_blank,
        } => Box::new(GroceryCommand::new(cli.catalog, have, format, keep_blank)),
        Commands::Show {
            title,
            have,
            format,
            keep_blank,
        } => Box::new(ShowCommand::new(cli.catalog, title, have, format, keep_blank)),
    };

    handler
        .execute()
        .with_context(|| format!("pantry {} failed", name))
}
