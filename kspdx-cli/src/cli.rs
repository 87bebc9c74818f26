//! CLI argument parsing using clap derive API
//!
//! This module defines the command-line interface structure using clap's derive macros.
//! It is purely declarative with no side effects or I/O.

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};

/// kspdx -- SPDX 2.1 tag-value documents for kernel license scans.
///
/// Use `kspdx <COMMAND> --help` for subcommand details.
#[derive(Parser, Debug)]
#[command(name = "kspdx", version, about, long_about = None)]
pub struct Cli {
    /// Path to the kspdx.toml configuration file (defaults apply if it does not exist).
    #[arg(short, long, global = true, default_value = "kspdx.toml")]
    pub config: PathBuf,

    /// Override log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Output format for reports.
    #[arg(long, global = true, default_value = "text")]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON.
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a JSON document model as SPDX tag-value.
    Render(RenderArgs),

    /// Build and print the creation info section.
    CreationInfo(CreationInfoArgs),

    /// Manage configuration.
    Config(ConfigArgs),
}

// ---- render ----

/// Render a document to SPDX 2.1 tag-value.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// JSON file containing the document model.
    pub input: PathBuf,

    /// Write tag-value to this file instead of stdout.
    #[arg(short = 'o', long)]
    pub out: Option<PathBuf>,
}

// ---- creation-info ----

/// Build a creation info section from a package name and verification code.
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("package").required(true).args(["package_name", "kernel_version"])))]
pub struct CreationInfoArgs {
    /// Package (directory) name, also used as the document name.
    #[arg(long)]
    pub package_name: Option<String>,

    /// Kernel version; the package name becomes `linux-<VERSION>`.
    #[arg(long)]
    pub kernel_version: Option<String>,

    /// Package verification code.
    #[arg(long)]
    pub code: String,

    /// Document namespace prefix (default: config `document.namespace_prefix`).
    #[arg(long)]
    pub namespace_prefix: Option<String>,

    /// Creator type: Person, Organization or Tool (default: config `document.creator_type`).
    #[arg(long)]
    pub creator_type: Option<String>,

    /// Creator identity (default: config `document.creator`).
    #[arg(long)]
    pub creator: Option<String>,

    /// Fix the creation timestamp (RFC 3339) instead of using the current time.
    #[arg(long)]
    pub created: Option<String>,
}

// ---- config ----

/// Manage kspdx configuration.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate the configuration file and report errors.
    Validate,
    /// Show the effective configuration (file + env overrides + defaults).
    Show {
        /// Show only a specific section (general, document).
        #[arg(long)]
        section: Option<String>,
    },
}
