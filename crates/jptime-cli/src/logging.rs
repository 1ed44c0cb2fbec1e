//! Log output for the `jptime` binary.
//!
//! The library and this binary both log under the `jptime` target (the
//! binary's crate name comes from its `[[bin]]` name), and only that target is
//! filtered in, so dependency noise stays out of stderr even at `-vvv`.

use tracing_subscriber::EnvFilter;

const TARGET: &str = "jptime";

fn level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// The `target=level` directive used when `RUST_LOG` is unset.
fn default_directive(verbosity: u8) -> String {
    format!("{TARGET}={}", level(verbosity))
}

/// Install the stderr subscriber. `RUST_LOG`, when set, replaces the
/// `-v` count entirely.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
