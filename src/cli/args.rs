//! CLI argument definitions using clap
//!
//! Commands:
//! - abxadvisor items --config <path>
//! - abxadvisor decide --config <path>
//! - abxadvisor explain --config <path>
//! - abxadvisor start --config <path>
//! - abxadvisor serve --config <path> [--port <port>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// abxadvisor - empirical antimicrobial treatment advisor
#[derive(Parser, Debug)]
#[command(name = "abxadvisor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List selectable bacteria and resistance markers
    Items {
        /// Path to configuration file
        #[arg(long, default_value = "./abxadvisor.json")]
        config: PathBuf,
    },

    /// Read one treatment request from stdin and print the decision
    Decide {
        /// Path to configuration file
        #[arg(long, default_value = "./abxadvisor.json")]
        config: PathBuf,
    },

    /// Read one treatment request from stdin and explain the decision
    Explain {
        /// Path to configuration file
        #[arg(long, default_value = "./abxadvisor.json")]
        config: PathBuf,
    },

    /// Serve line-delimited JSON requests on stdin
    Start {
        /// Path to configuration file
        #[arg(long, default_value = "./abxadvisor.json")]
        config: PathBuf,
    },

    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./abxadvisor.json")]
        config: PathBuf,

        /// Port override (defaults to the configured port)
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
