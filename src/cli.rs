use clap::Parser;
use sbom_flatten::application::dto::OutputFormat;
use std::path::PathBuf;

/// Flatten a directory tree of CycloneDX SBOM documents into one component table
#[derive(Parser, Debug)]
#[command(name = "sbom-flatten")]
#[command(version)]
#[command(about = "Flatten a directory tree of CycloneDX SBOM documents into one component table", long_about = None)]
pub struct Args {
    /// Output format: csv or json [default: csv]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Root directory searched recursively for SBOM JSON files (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file path (defaults to sbom-flatten.config.yml in the root directory, if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Abort on the first unreadable or malformed SBOM file instead of skipping it
    #[arg(long)]
    pub fail_fast: bool,

    /// Suppress progress output on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
