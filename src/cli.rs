//! CLI argument definitions using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Doxygen docstring extractor for C++ binding generators
#[derive(Parser, Debug)]
#[command(name = "doxtract")]
#[command(about = "Extracts escaped docstrings for C++ declarations, for embedding in generated bindings")]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Path to the declarations manifest (JSON array of declarations)
    #[arg(value_name = "MANIFEST")]
    pub manifest: PathBuf,

    /// Path to the mined documentation database (nested JSON)
    #[arg(short, long, value_name = "FILE", env = "DOXTRACT_DB")]
    pub db: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "lines", value_enum)]
    pub format: OutputFormat,

    /// Show verbose progress on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// One quoted docstring per line, in manifest order
    #[default]
    Lines,
    /// JSON array of { parent, name, doc } records
    Json,
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
