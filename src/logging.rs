//! Diagnostic logging.
//!
//! Logs go to stderr so stdout stays parseable. `RUST_LOG` takes precedence
//! over the `-v` count when set.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Map the number of `-v` flags to a default level.
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

pub fn init_console_logging(verbose: u8) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_for_verbosity(verbose).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .with_target(false)
        .init();
}
