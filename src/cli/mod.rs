//! CLI Module
//!
//! Command-line interface for running scripted paint sessions.

pub mod commands;
pub mod palette;
pub mod script;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::stores::DrawStyle;

/// Layerpaint - layered paint grid with undo and replay
#[derive(Parser, Debug)]
#[command(name = "layerpaint")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a JSON paint session and print the resulting grid
    #[command(name = "run")]
    Run {
        /// Path to the session script
        script: PathBuf,

        /// Override the session's draw style (set, add, sequence)
        #[arg(short, long)]
        style: Option<DrawStyle>,

        /// Override the grid width
        #[arg(long)]
        width: Option<usize>,

        /// Override the grid height
        #[arg(long)]
        height: Option<usize>,

        /// Replay the recorded session on a fresh grid afterwards
        #[arg(short, long)]
        replay: bool,
    },

    /// List the built-in layers
    #[command(name = "layers")]
    Layers,
}
