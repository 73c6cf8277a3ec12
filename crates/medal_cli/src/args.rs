// crates/medal_cli/src/args.rs
//
// CLI argument surface and validation.
//
// Rules:
// - Exactly one of: --input <file>  XOR  --url <url>
// - Sort state comes from defaults, then --query, then explicit flags
//   (flags win; each falls back independently).
// - --render picks the output format; --out redirects it to a file.

use clap::Parser;
use std::path::PathBuf;

use medal_core::{QueryParams, SortConfig, SortDirection, SortKey};

/// Parsed CLI arguments (raw).
#[derive(Debug, Parser, Clone)]
#[command(
    name = "medals",
    disable_help_subcommand = true,
    about = "Fetch, rank, and render Olympic medal standings"
)]
pub struct Args {
    // --- Input selection ---
    /// Local JSON snapshot path (mutually exclusive with --url).
    #[arg(long, conflicts_with = "url")]
    pub input: Option<PathBuf>,
    /// Medals endpoint URL (mutually exclusive with --input).
    #[arg(long)]
    pub url: Option<String>,

    // --- Sort state ---
    /// Sort key (gold|silver|bronze|total). Overrides --query.
    #[arg(long)]
    pub sort: Option<SortKey>,
    /// Sort direction (asc|desc). Overrides --query.
    #[arg(long)]
    pub direction: Option<SortDirection>,
    /// Shared query string, e.g. "sort=silver&direction=asc". Unknown keys
    /// are preserved and echoed back by --echo-query.
    #[arg(long)]
    pub query: Option<String>,

    // --- Output ---
    /// Output format.
    #[arg(long, value_parser = ["text", "json", "csv"], default_value = "text")]
    pub render: String,
    /// Write rendered output to this file instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Print the canonical query string for the effective sort state.
    #[arg(long)]
    pub echo_query: bool,

    /// Suppress diagnostic logging.
    #[arg(long)]
    pub quiet: bool,
}

/// Errors surfaced by argument validation.
/// Keep messages short/stable (handy for scripts/tests).
#[derive(Debug, Eq, PartialEq)]
pub enum CliError {
    Missing(&'static str),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Missing(what) => write!(f, "missing {what}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Parse from the process arguments and validate cross-flag rules.
pub fn parse_and_validate() -> Result<Args, CliError> {
    validate(Args::parse())
}

pub fn validate(args: Args) -> Result<Args, CliError> {
    if args.input.is_none() && args.url.is_none() {
        return Err(CliError::Missing("--input <file> or --url <url>"));
    }
    Ok(args)
}

impl Args {
    /// Parameter bag from --query (empty when absent).
    pub fn params(&self) -> QueryParams {
        self.query
            .as_deref()
            .map(QueryParams::parse)
            .unwrap_or_default()
    }

    /// Effective sort config: defaults, overridden by --query, overridden by
    /// explicit flags. Built once, as a unit.
    pub fn sort_config(&self) -> SortConfig {
        let base = SortConfig::from_params(&self.params());
        SortConfig::new(
            self.sort.unwrap_or(base.key),
            self.direction.unwrap_or(base.direction),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("medals").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn requires_an_input_source() {
        let err = validate(args(&["--sort", "gold"])).unwrap_err();
        assert_eq!(err, CliError::Missing("--input <file> or --url <url>"));
        assert!(validate(args(&["--input", "medals.json"])).is_ok());
    }

    #[test]
    fn input_and_url_conflict() {
        let result = Args::try_parse_from([
            "medals",
            "--input",
            "medals.json",
            "--url",
            "https://api.example.org/medals",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn defaults_are_gold_descending() {
        let a = args(&["--input", "medals.json"]);
        assert_eq!(a.sort_config(), SortConfig::default());
    }

    #[test]
    fn query_is_decoded_permissively() {
        let a = args(&["--input", "m.json", "--query", "sort=bogus&direction=asc"]);
        assert_eq!(
            a.sort_config(),
            SortConfig::new(SortKey::Gold, SortDirection::Ascending)
        );
    }

    #[test]
    fn flags_override_query_independently() {
        let a = args(&[
            "--input",
            "m.json",
            "--query",
            "sort=silver&direction=asc",
            "--sort",
            "bronze",
        ]);
        // Key overridden by flag, direction still honored from the query.
        assert_eq!(
            a.sort_config(),
            SortConfig::new(SortKey::Bronze, SortDirection::Ascending)
        );
    }

    #[test]
    fn bad_sort_flag_is_a_parse_error() {
        assert!(Args::try_parse_from(["medals", "--input", "m.json", "--sort", "points"]).is_err());
        assert!(
            Args::try_parse_from(["medals", "--input", "m.json", "--direction", "down"]).is_err()
        );
    }
}
