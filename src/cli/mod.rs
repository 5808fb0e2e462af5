//! Command-line interface for photo-minder.
//!
//! This module provides CLI commands for rating-based tagging, tag copying,
//! and external-tool diagnostics.

mod commands;

pub use commands::{Cli, Commands, run_command};
