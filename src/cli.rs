use clap::Parser;
use npm_license_walker::license_walk::domain::PackageIdentifier;
use std::path::PathBuf;

/// Parses a positional argument into a package identifier
///
/// Invalid identifiers are rejected by clap, so they exit with the
/// invalid-arguments code before any network access.
fn parse_package_identifier(input: &str) -> Result<PackageIdentifier, String> {
    PackageIdentifier::parse(input).map_err(|e| e.to_string())
}

/// Walk npm dependency trees and print the license of every package
#[derive(Parser, Debug)]
#[command(name = "npm-license-walker")]
#[command(version)]
#[command(
    about = "Walk npm dependency trees and print the license of every package",
    long_about = None
)]
pub struct Args {
    /// Packages to walk: name, name@version, name@range or name@tag
    #[arg(required = true, value_name = "PACKAGE", value_parser = parse_package_identifier)]
    pub packages: Vec<PackageIdentifier>,

    /// Path to a config file (defaults to ./npm-license-walker.config.yml if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print progress and diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored license annotations
    #[arg(long)]
    pub no_color: bool,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Maximum number of concurrent HTTP requests (0 = unlimited)
    #[arg(long, value_name = "N")]
    pub max_concurrent: Option<usize>,

    /// Cache registry metadata for the duration of the run
    #[arg(long)]
    pub cache: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
