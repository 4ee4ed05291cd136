pub mod explain;
pub mod output;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "agentscore",
    version,
    about = "Quality scoring and suggestions for AI agent instruction files"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score instruction files and list suggestions
    Check {
        /// Files or directories to check; `-` reads from stdin
        #[arg(default_value = ".")]
        paths: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Create a default .agentscorerc.toml
    Init,
    /// Explain what a rule checks and why it matters (omit rule to list all)
    Explain {
        /// Rule id (e.g., missing-setup, empty-section, well-formed)
        rule: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Github,
}
