//! CLI module for the stackdiff tool.
//!
//! This module provides the command-line interface and output formatting.

mod commands;
mod output;

pub use commands::{Cli, Commands, DiffArgs, OutputFormat};
pub use output::{OutputFormatter, EQUAL_MESSAGE};
