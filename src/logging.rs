//! Diagnostics for the `causal-synth` binary
//!
//! Generated matrices go to stdout, so diagnostics are written to stderr as
//! bare `LEVEL message key=value` lines.
//!
//! ```no_run
//! use causal_synth::logging::{self, Verbosity};
//!
//! logging::init(Verbosity::from_flags(true, false));
//! tracing::debug!(n_nodes = 5, "visible with --verbose");
//! ```

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry};

/// How much the CLI reports while generating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Warnings and errors only
    Quiet,
    /// Per-trial summaries
    #[default]
    Normal,
    /// Every generation step (DAG, weights, noise draws)
    Verbose,
}

impl Verbosity {
    /// `--verbose` wins over `--quiet` when both are given
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        match (verbose, quiet) {
            (true, _) => Verbosity::Verbose,
            (false, true) => Verbosity::Quiet,
            (false, false) => Verbosity::Normal,
        }
    }

    pub fn level_filter(self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::WARN,
            Verbosity::Normal => LevelFilter::INFO,
            Verbosity::Verbose => LevelFilter::DEBUG,
        }
    }
}

/// Install the stderr subscriber.
///
/// Only the first call in a process takes effect; tests and repeated CLI
/// setup may call it freely.
pub fn init(verbosity: Verbosity) {
    let stderr_lines = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .compact()
        .with_filter(verbosity.level_filter());

    let installed = Registry::default().with(stderr_lines).try_init().is_ok();
    if installed {
        tracing::debug!(?verbosity, "diagnostics enabled");
    }
}
