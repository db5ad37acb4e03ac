use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Command-line interface for the hook manager
#[derive(Parser)]
#[command(name = "husky")]
#[command(about = "Git hooks manager that points core.hooksPath at a project folder")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Set up git hooks
    Install {
        /// Hooks directory, relative to the repository root (default: .husky)
        dir: Option<String>,
    },
    /// Unset git hooks
    Uninstall,
    /// Add a command to a hook file, creating it if needed
    Add {
        /// Hook file, e.g. .husky/pre-commit
        file: PathBuf,
        /// Command to append
        cmd: String,
    },
    /// Create or replace a hook file
    Set {
        /// Hook file, e.g. .husky/pre-commit
        file: PathBuf,
        /// Command the hook runs
        cmd: String,
    },
    /// Show build information
    Version {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}
