//! Command-line flags.

use gift_canon::CanonOptions;
use gift_fmt::Grouping;

pub const USAGE: &str = "\
Usage: gift [options] [<expr>...]

Rewrites each combination expression into GIFT-Boolean form. With no
expressions, reads one expression per line from standard input.

Options:
  -q, --quiet            Print only the canonical expression
  -s, --stats            Print pass and per-rule rewrite counts
  --group=<mode>         Parentheses in output: flat, minimal, full (default: full)
  --max-passes=<n>       Fail if no fixpoint is reached within <n> passes (n >= 1)
  -h, --help             Show this message";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliOptions {
    pub quiet: bool,
    pub stats: bool,
    pub grouping: Grouping,
    pub canon: CanonOptions,
    pub help: bool,
    /// Expressions given on the command line; empty means read stdin.
    pub expressions: Vec<String>,
}

impl Default for CliOptions {
    fn default() -> Self {
        CliOptions {
            quiet: false,
            stats: false,
            grouping: Grouping::Full,
            canon: CanonOptions::default(),
            help: false,
            expressions: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("unknown option `{0}`")]
    UnknownOption(String),
    #[error("invalid value `{value}` for `{option}`")]
    InvalidValue { option: &'static str, value: String },
}

/// Parse the arguments after the program name.
pub fn parse_args(args: &[String]) -> Result<CliOptions, UsageError> {
    let mut options = CliOptions::default();
    let mut only_expressions = false;

    for arg in args {
        if only_expressions {
            options.expressions.push(arg.clone());
        } else if arg == "--" {
            only_expressions = true;
        } else if arg == "-q" || arg == "--quiet" {
            options.quiet = true;
        } else if arg == "-s" || arg == "--stats" {
            options.stats = true;
        } else if arg == "-h" || arg == "--help" {
            options.help = true;
        } else if let Some(mode) = arg.strip_prefix("--group=") {
            options.grouping = match mode {
                "flat" => Grouping::Flat,
                "minimal" => Grouping::Minimal,
                "full" => Grouping::Full,
                _ => {
                    return Err(UsageError::InvalidValue {
                        option: "--group",
                        value: mode.to_string(),
                    })
                }
            };
        } else if let Some(n) = arg.strip_prefix("--max-passes=") {
            let passes = n
                .parse()
                .ok()
                .filter(|&passes: &usize| passes > 0)
                .ok_or_else(|| UsageError::InvalidValue {
                    option: "--max-passes",
                    value: n.to_string(),
                })?;
            options.canon.max_passes = Some(passes);
        } else if arg.starts_with('-') {
            return Err(UsageError::UnknownOption(arg.clone()));
        } else {
            options.expressions.push(arg.clone());
        }
    }

    Ok(options)
}
