//! CLI parse: clap types for pagetree. No behavior; definitions only.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// pagetree CLI - Hierarchy root resolution and descendant export for page trees
#[derive(Parser)]
#[command(name = "pagetree")]
#[command(about = "Resolve hierarchy roots and export page descendants from a content tree")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (searched for pagetree.toml)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides workspace config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Export the descendants of a page
    Export {
        /// TOML tree fixture
        #[arg(long)]
        tree: PathBuf,
        /// Path of the current page
        #[arg(long)]
        page: String,
        /// Path of the entry point page
        #[arg(long)]
        entry: Option<String>,
        /// Comma-separated structure patterns (override the page style)
        #[arg(long)]
        structure_patterns: Option<String>,
        /// Export raw page paths as keys
        #[arg(long)]
        author: bool,
        /// Do not append .html to exported URLs
        #[arg(long)]
        no_extension: bool,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Show the hierarchy root of a page
    Root {
        /// TOML tree fixture
        #[arg(long)]
        tree: PathBuf,
        /// Path of the current page
        #[arg(long)]
        page: String,
        /// Export raw page paths
        #[arg(long)]
        author: bool,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}
