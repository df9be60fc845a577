//! Command-line interface.
//!
//! # Error Handling Strategy
//!
//! Commands return `anyhow::Result` and exit nonzero on failure. Search
//! commands route portal failures through the screen state machine first so
//! the user sees the same terminal states the interactive flow would show,
//! then surface `Failed` as a process error.

pub mod commands;
pub mod render;

use anyhow::Result;
use clap::Parser;

pub use commands::{Cli, Commands};

/// Parse arguments and run the selected command.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    commands::run(cli).await
}
