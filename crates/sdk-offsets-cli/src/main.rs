mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

use cli::{Cli, Command};

/// Used when `RUST_LOG` is unset or empty
const DEFAULT_LOG_FILTER: &str = "sdk_offsets_core=info,sdk_offsets=info";

fn log_filter(env: Option<&str>) -> Result<EnvFilter, ParseError> {
    match env.map(str::trim) {
        Some(directives) if !directives.is_empty() => EnvFilter::try_new(directives),
        _ => EnvFilter::try_new(DEFAULT_LOG_FILTER),
    }
}

fn main() -> Result<()> {
    // Initialize logging (stderr, stdout is for command output)
    let filter = log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref())?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = commands::load_config(&cli.config)?;

    match cli.command {
        None => commands::generate::run(config, false),
        Some(Command::Generate { strict }) => commands::generate::run(config, strict),
        Some(Command::Offset {
            document,
            owner,
            field,
        }) => commands::lookup::run_offset(&config, &document, &owner, &field),
        Some(Command::Size { document, owner }) => {
            commands::lookup::run_size(&config, &document, &owner)
        }
        Some(Command::Config) => commands::config::run_show(&config),
        Some(Command::List) => commands::config::run_list(&config),
    }
}
