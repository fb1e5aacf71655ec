//! Layerpaint CLI
//!
//! Command-line interface for running scripted paint sessions.

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::info;

use layerpaint::cli::{commands, Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    info!("Layerpaint v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Some(cmd) => handle_command(cmd),
        None => {
            println!("Layerpaint v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
            Ok(())
        }
    }
}

fn handle_command(cmd: Commands) -> anyhow::Result<()> {
    match cmd {
        Commands::Run {
            script,
            style,
            width,
            height,
            replay,
        } => commands::run(&script, style, width, height, replay)
            .with_context(|| format!("failed to run session {}", script.display())),
        Commands::Layers => Ok(commands::list_layers()?),
    }
}
