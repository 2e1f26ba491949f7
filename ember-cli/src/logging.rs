//! Tracing subscriber setup.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `--verbose` turns on debug output
/// for the Ember crates and everything else stays at `warn`.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("warn,ember=debug,ember_lexer=debug,ember_diagnostic=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    // Keep any subscriber installed earlier.
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
