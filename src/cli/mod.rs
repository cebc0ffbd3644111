//! CLI for the Retro Board API

pub mod serve;

use clap::{Parser, Subcommand};

/// Retro Board API - backend for team retrospective boards
#[derive(Parser)]
#[command(name = "retro-board-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,
}
