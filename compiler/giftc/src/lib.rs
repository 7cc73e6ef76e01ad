//! Driver for the `gift` command.
//!
//! Parses combination expressions, rewrites them into GIFT-Boolean form
//! and prints the canonical expression together with the member list it
//! flattens to.

pub mod commands;
pub mod options;

use std::sync::Once;

pub use commands::{process, render_outcome, CommandError, Outcome};
pub use options::{parse_args, CliOptions, UsageError};

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=gift_canon=debug gift 'a + (b u c)'`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
