//! CLI module for abxadvisor
//!
//! Provides command-line interface for:
//! - items: List selectable items
//! - decide: One-shot treatment decision
//! - explain: One-shot decision explanation
//! - start: Line-delimited serving loop on stdin
//! - serve: HTTP server

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{decide, explain, items, run, run_command, serve, start, Config};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_request, read_requests, write_error, write_json};
