//! Diagnostics for the binary itself, separate from the logger it demos.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::time::UtcTime;

/// `--trace-verbosity` to a max level: 0 warn, 1 info, 2 debug.
pub fn level_from_verbosity(v: u8) -> LevelFilter {
    match v {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    }
}

/// Install the global subscriber. `RUST_LOG` directives win over `default`.
pub fn init(default: LevelFilter) {
    let filter = EnvFilter::builder()
        .with_default_directive(default.into())
        .from_env_lossy();

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_timer(UtcTime::rfc_3339())
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(true)
        // stdout belongs to the logger's own lines
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_verbosity() {
        assert_eq!(level_from_verbosity(0), LevelFilter::WARN);
        assert_eq!(level_from_verbosity(1), LevelFilter::INFO);
        assert_eq!(level_from_verbosity(2), LevelFilter::DEBUG);
    }
}
