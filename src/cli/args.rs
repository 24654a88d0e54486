//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// rehost - point a client at a self-hosted backend.
#[derive(Debug, Parser)]
#[command(name = "rehost")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the override document
    #[arg(long, global = true, env = "REHOST_DIR")]
    pub dir: Option<PathBuf>,

    /// Override document file name
    #[arg(long, global = true, env = "REHOST_FILE")]
    pub file: Option<String>,

    /// Allow plain http roots when saving overrides
    #[arg(
        long,
        global = true,
        env = "REHOST_ALLOW_HTTP",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub allow_http: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the effective endpoints (default if no command specified)
    Resolve(ResolveArgs),

    /// Show the editable override fields
    Show(ShowArgs),

    /// Save endpoint overrides
    Set(SetArgs),

    /// Edit endpoint overrides interactively
    Edit,

    /// Remove the override document
    Reset,

    /// Print the override document path
    Path,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `resolve` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ResolveArgs {
    /// Output as JSON
    #[arg(long, conflicts_with = "yaml")]
    pub json: bool,

    /// Output as YAML
    #[arg(long)]
    pub yaml: bool,

    /// Print credentials unmasked
    #[arg(long)]
    pub show_secrets: bool,
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ShowArgs {
    /// Print credentials unmasked
    #[arg(long)]
    pub show_secrets: bool,
}

/// Arguments for the `set` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SetArgs {
    /// Root URL for both website and API
    #[arg(long)]
    pub base_url: String,

    /// API root, when it differs from the base URL
    #[arg(long)]
    pub api_url: Option<String>,

    /// OAuth client id
    #[arg(long)]
    pub client_id: Option<String>,

    /// OAuth client secret
    #[arg(long)]
    pub client_secret: Option<String>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
