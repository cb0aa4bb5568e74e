//! Tracing subscriber setup shared by the binaries.
//!
//! `RUST_LOG` always wins; otherwise the caller's default directive is used.
//! Output goes to stderr so command output on stdout stays clean.

use tracing_subscriber::EnvFilter;

/// Map a `-v` count to a filter directive.
pub fn verbosity_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global fmt subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(default_directive: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(verbosity_filter(0), "warn");
        assert_eq!(verbosity_filter(1), "info");
        assert_eq!(verbosity_filter(2), "debug");
        assert_eq!(verbosity_filter(9), "trace");
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init("warn");
        init("debug");
    }
}
