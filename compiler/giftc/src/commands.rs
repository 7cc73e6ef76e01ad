//! Canonicalize one expression and render the report.

use std::fmt::Write as _;

use gift_canon::{flatten, CanonError, CanonOptions, CanonStats, Canonicalizer, RuleId};
use gift_fmt::{render_with, Grouping, RenderOptions};
use gift_ir::{Member, StringInterner};
use gift_parse::ParseError;
use tracing::debug;

use crate::CliOptions;

/// Result of canonicalizing one expression.
#[derive(Clone, Debug)]
pub struct Outcome {
    pub input: String,
    pub canonical: String,
    pub stats: CanonStats,
    pub members: Vec<Member>,
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Carries the rendered diagnostic.
    #[error("{report}")]
    Parse { error: ParseError, report: String },
    #[error("cannot canonicalize `{input}`: {error}")]
    Canon { input: String, error: CanonError },
}

/// Parse `source`, canonicalize it and flatten the result.
pub fn process(
    source: &str,
    interner: &StringInterner,
    canon: CanonOptions,
    grouping: Grouping,
) -> Result<Outcome, CommandError> {
    let mut tree = gift_parse::parse(source, interner).map_err(|error| CommandError::Parse {
        report: error.report(source),
        error,
    })?;
    let input = render_with(&tree, interner, render_options(grouping));

    let canon_error = |error| CommandError::Canon {
        input: input.clone(),
        error,
    };
    let stats = Canonicalizer::new(canon)
        .canonicalize(&mut tree)
        .map_err(canon_error)?;
    let members = flatten(&tree).map_err(canon_error)?;
    debug!(rewrites = stats.rewrites, members = members.len(), "processed expression");

    Ok(Outcome {
        canonical: render_with(&tree, interner, render_options(grouping)),
        input,
        stats,
        members,
    })
}

fn render_options(grouping: Grouping) -> RenderOptions {
    RenderOptions {
        grouping,
        trailing_newline: false,
    }
}

/// The text printed for `outcome`, ending in a newline.
pub fn render_outcome(outcome: &Outcome, interner: &StringInterner, cli: &CliOptions) -> String {
    let mut out = String::new();
    if cli.quiet {
        let _ = writeln!(out, "{}", outcome.canonical);
        return out;
    }

    let _ = writeln!(out, "input:     {}", outcome.input);
    let _ = writeln!(out, "canonical: {}", outcome.canonical);
    let _ = writeln!(out, "rewrites:  {}", outcome.stats.rewrites);
    if cli.stats {
        let _ = writeln!(out, "passes:    {}", outcome.stats.passes);
        for rule in RuleId::ALL {
            let count = outcome.stats.rule_count(rule);
            if count > 0 {
                let _ = writeln!(out, "  {rule}: {count}");
            }
        }
    }
    let _ = writeln!(out, "members:");
    for member in &outcome.members {
        let _ = writeln!(out, "  {} {}", member.op, interner.lookup(member.name));
    }
    out
}
