//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// jdbc-codec - Parse and rebuild JDBC connection URLs
#[derive(Parser, Debug)]
#[command(name = "jdbc-codec")]
#[command(author = "Pegasus Heavy Industries LLC")]
#[command(version)]
#[command(about = "jdbc-codec - Parse and rebuild JDBC connection URLs", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Options shared by every command
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command
#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// Path to config file (defaults to ./jdbc-codec.toml when present)
    #[arg(long, global = true, env = "JDBC_CODEC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory of custom dialect records (overrides the config file)
    #[arg(long, global = true, env = "JDBC_CODEC_DIALECTS_DIR")]
    pub dialects_dir: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a connection URL into server address, port and database name
    Parse(ParseArgs),

    /// Build a connection URL, keeping the driver parameters of an old one
    Build(BuildArgs),

    /// Identify the dialect of a JDBC driver class
    Classify(ClassifyArgs),

    /// Inspect and manage dialects
    Dialect(DialectArgs),

    /// Display version information
    Version,
}

// =============================================================================
// Parse Command
// =============================================================================

/// Arguments for the `parse` command
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Dialect id (e.g. "PostgreSQL", "MS SQL")
    #[arg(short, long)]
    pub dialect: String,

    /// Connection URL to parse
    pub url: String,

    /// Print the parts as JSON
    #[arg(long)]
    pub json: bool,
}

// =============================================================================
// Build Command
// =============================================================================

/// Arguments for the `build` command
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Dialect id (e.g. "PostgreSQL", "MS SQL")
    #[arg(short, long)]
    pub dialect: String,

    /// Existing URL whose driver parameters and parts are kept
    #[arg(short, long)]
    pub from: Option<String>,

    /// Server host name or address
    #[arg(long)]
    pub host: Option<String>,

    /// Server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Database name
    #[arg(long)]
    pub database: Option<String>,
}

// =============================================================================
// Classify Command
// =============================================================================

/// Arguments for the `classify` command
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Fully qualified driver class name
    pub driver_class: String,
}

// =============================================================================
// Dialect Command
// =============================================================================

/// Arguments for the `dialect` command
#[derive(Args, Debug)]
pub struct DialectArgs {
    #[command(subcommand)]
    pub command: DialectSubcommand,
}

/// Dialect subcommands
#[derive(Subcommand, Debug)]
pub enum DialectSubcommand {
    /// List built-in and custom dialects
    List(DialectListArgs),

    /// Show one dialect
    Show(DialectShowArgs),

    /// Add or replace a custom dialect
    Add(DialectAddArgs),

    /// Remove a custom dialect
    Remove(DialectRemoveArgs),
}

/// Arguments for `dialect list`
#[derive(Args, Debug)]
pub struct DialectListArgs {
    /// Print the dialects as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `dialect show`
#[derive(Args, Debug)]
pub struct DialectShowArgs {
    /// Dialect id
    pub id: String,

    /// Print the dialect as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `dialect add`
#[derive(Args, Debug)]
pub struct DialectAddArgs {
    /// Dialect id
    #[arg(short, long)]
    pub name: String,

    /// Fully qualified driver class name
    #[arg(long)]
    pub driver_class: String,

    /// JDBC URL prefix (e.g. "jdbc:h2:tcp://")
    #[arg(long)]
    pub jdbc_prefix: String,

    /// Default port
    #[arg(short, long)]
    pub port: u16,

    /// Character between host:port and the database name
    #[arg(short, long, default_value = "/")]
    pub separator: char,
}

/// Arguments for `dialect remove`
#[derive(Args, Debug)]
pub struct DialectRemoveArgs {
    /// Dialect id
    pub name: String,
}
