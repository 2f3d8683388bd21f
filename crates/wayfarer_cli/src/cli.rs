//! CLI argument definitions using clap derive macros.

use clap::{Parser, Subcommand, ValueEnum};

/// Terminal travel-advisor chat
#[derive(Parser)]
#[command(name = "wayfarer", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for machine consumption
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the interactive chat TUI
    Tui {
        /// Model to use (e.g. llama-3.3-70b-versatile). Uses WAYFARER_MODEL env if not set.
        #[arg(long)]
        model: Option<String>,
        /// Initial reply length: concise, moderate, or explained. Uses WAYFARER_LENGTH env if not set.
        #[arg(long)]
        length: Option<String>,
    },
    /// Ask a single question and print the reply
    Ask {
        /// The question for the travel advisor
        prompt: String,
        /// Model to use (e.g. llama-3.3-70b-versatile)
        #[arg(long)]
        model: Option<String>,
        /// Reply length: concise, moderate, or explained
        #[arg(long)]
        length: Option<String>,
    },
    /// Inspect and test completion providers
    Providers {
        #[command(subcommand)]
        action: ProvidersAction,
    },
}

#[derive(Subcommand)]
pub enum ProvidersAction {
    /// List all registered providers
    List,
    /// Test provider connectivity
    Test {
        /// Provider ID
        provider: String,
    },
    /// List available models
    Models {
        /// Provider ID
        provider: String,
    },
}
