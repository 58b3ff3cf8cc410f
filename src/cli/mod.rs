//! CLI module - Command-line interface for the guessing game server
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Guess the anime - trivia game server
#[derive(Parser)]
#[command(name = "guess-anime")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API server (default)
    #[command(alias = "daemon")]
    Serve,

    /// Import anime records from a JSON file into the catalogue
    Import {
        /// JSON array of anime records
        path: PathBuf,
    },

    /// Clear all guesses and pick a new answer
    NewRound {
        /// Use this anime instead of a random one
        #[arg(long, value_parser = clap::value_parser!(i32).range(1..))]
        anime_id: Option<i32>,
    },

    /// Show the catalogue size and the current round
    #[command(alias = "st")]
    Status,

    /// Create default config file
    #[command(alias = "--init")]
    Init,
}

pub use commands::*;
