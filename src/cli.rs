//! CLI mode definitions
//!
//! Argument surface for the translens binary. Input validation that the
//! core deliberately leaves to the presentation layer (the three-locale
//! bound, repository name resolution) happens here.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// translens CLI
#[derive(Parser)]
#[command(name = "translens")]
#[command(about = "Find and compare localized strings across locales and repositories", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding per-repository string tables (<dir>/<repo>/<locale>.json)
    #[arg(long, global = true, env = "TRANSLENS_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output (no short flag to avoid conflicts)
    #[arg(long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search strings across locales
    Search(SearchArgs),
    /// Dump the in-scope string table of a product
    Strings(StringsArgs),
    /// Report missing-string counts per locale against a reference
    Coverage(CoverageArgs),
}

/// Search arguments
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Search terms
    #[arg(short = 'q', long)]
    pub query: String,

    /// Locale to return results for, repeatable up to three times
    #[arg(short, long = "locale", required = true)]
    pub locales: Vec<String>,

    /// Repository name, or "global" to search all repositories
    #[arg(short, long, default_value = "aurora")]
    pub repo: String,

    /// Require word boundaries around the match
    #[arg(long)]
    pub whole_words: bool,

    /// Match case exactly
    #[arg(long)]
    pub case_sensitive: bool,

    /// Only return strings equal to the whole query
    #[arg(long)]
    pub perfect_match: bool,

    /// Maximum results displayed per locale (matching never truncates)
    #[arg(long, default_value_t = 200)]
    pub limit: usize,

    /// Restrict matches to a product's in-scope strings
    #[arg(long)]
    pub product: Option<String>,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Strings dump arguments
#[derive(Parser, Debug)]
pub struct StringsArgs {
    /// Product name (unknown names fall back to Firefox)
    #[arg(short, long, default_value = "Firefox")]
    pub product: String,

    /// Locale code
    #[arg(short, long)]
    pub locale: String,

    /// Repository name (unknown names fall back to central)
    #[arg(short, long, default_value = "release")]
    pub repo: String,

    /// Drop access-key entities from the table
    #[arg(long)]
    pub no_access_keys: bool,

    /// Show the devtools subset instead of the full table
    #[arg(long)]
    pub devtools: bool,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Coverage arguments
#[derive(Parser, Debug)]
pub struct CoverageArgs {
    /// Target locales to measure, repeatable
    #[arg(short, long = "locale", required = true)]
    pub locales: Vec<String>,

    /// Repository name
    #[arg(short, long, default_value = "aurora")]
    pub repo: String,

    /// Reference locale counted as complete
    #[arg(long, default_value = "en-US")]
    pub reference: String,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}
