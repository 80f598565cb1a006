//! Diagnostic logging for a single run
//!
//! Stages log through `tracing` macros. Nothing is printed unless the run was
//! started with `--verbose`, in which case diagnostics go to stdout alongside
//! (but separate from) the fingerprint itself.
//!
//! The subscriber is scoped to the run with [`LogSettings::scope`] rather than
//! installed globally, so library callers keep control of their own logging.

use tracing::Subscriber;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Logging configuration derived from the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogSettings {
    pub verbose: bool,
}

impl LogSettings {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Filter directive for this verbosity
    pub fn directive(&self) -> &'static str {
        if self.verbose {
            "fingerprinter=debug"
        } else {
            "off"
        }
    }

    /// Build a subscriber that writes compact lines to stdout
    pub fn subscriber(&self) -> impl Subscriber + Send + Sync {
        tracing_subscriber::registry()
            .with(EnvFilter::new(self.directive()))
            .with(
                fmt::layer()
                    .with_writer(std::io::stdout)
                    .with_ansi(false)
                    .with_target(false)
                    .without_time()
                    .compact(),
            )
    }

    /// Run `f` with this configuration as the active subscriber
    pub fn scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::subscriber::with_default(self.subscriber(), f)
    }
}
