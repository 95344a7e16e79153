//! Command-line interface module.
//!
//! This module handles CLI argument parsing and the conversion of parsed
//! arguments into a [`GreetingConfig`].

use crate::models::greeting::{
    DEFAULT_GREETING, DEFAULT_NAME, DEFAULT_PUNCTUATION, GreetingConfig, Style,
};
use clap::{ArgAction, Parser};
use std::ffi::OsString;
use tracing::debug;

/// CLI arguments for the greeter
#[derive(Parser, Debug)]
#[command(author, version, about = "Print a customizable greeting.", long_about = None)]
pub struct Args {
    /// Name to greet
    #[arg(default_value = DEFAULT_NAME)]
    pub name: String,

    /// Greeting word
    #[arg(short, long, default_value = DEFAULT_GREETING)]
    pub greeting: String,

    /// Number of times to print the greeting; values below 1 print it once [default: 1]
    #[arg(short, long, allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Trailing punctuation
    #[arg(short, long, default_value = DEFAULT_PUNCTUATION)]
    pub punctuation: String,

    /// Text style transformation to apply
    #[arg(short, long, value_enum, default_value_t = Style::Plain)]
    pub style: Style,

    /// Log diagnostics to stderr; repeat for more detail (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl From<Args> for GreetingConfig {
    fn from(args: Args) -> Self {
        let cfg = GreetingConfig::new(
            args.greeting,
            args.name,
            args.count.unwrap_or(1),
            args.punctuation,
            args.style,
        );
        debug!(
            greeting = cfg.greeting(),
            name = cfg.name(),
            count = cfg.count(),
            punctuation = cfg.punctuation(),
            style = %cfg.style(),
            "resolved greeting configuration"
        );
        cfg
    }
}

/// Parses `argv` (program name first) into a configuration.
///
/// # Errors
/// Returns the clap usage error for unknown options, a non-integer count, an
/// invalid style or surplus positionals. `--help` and `--version` also come
/// back as errors of the matching kind.
pub fn try_parse_args<I, T>(argv: I) -> Result<GreetingConfig, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Args::try_parse_from(argv).map(GreetingConfig::from)
}

/// Parses `argv` (program name first) into a configuration.
///
/// # Exits
/// On malformed input this prints the diagnostic and usage summary to stderr
/// and exits the process with clap's usage-error status. Nothing is returned
/// in that case, so callers never see a partially parsed configuration.
pub fn parse_args<I, T>(argv: I) -> GreetingConfig
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    try_parse_args(argv).unwrap_or_else(|e| e.exit())
}
