//! tracklist - build, convert and inspect audio playlists

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

use cli::{Cli, Commands};
use tracklist::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "tracklist=debug"
    } else {
        "tracklist=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = Config::load()?;

    match cli.command {
        Commands::Build { first, folder } => {
            cli::commands::build(first, folder, &config)?;
        }
        Commands::Convert { format, playlists } => {
            cli::commands::convert(&format, &playlists)?;
        }
        Commands::Info { playlists } => {
            cli::commands::info(&playlists)?;
        }
        Commands::Completion { shell } => {
            cli::commands::completion(shell);
        }
    }

    Ok(())
}
