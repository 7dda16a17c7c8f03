//! Tracing setup shared by both binaries.
//!
//! Logs go to stderr: stdout carries CLI output and the stdio MCP transport.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter for a `-v` count when RUST_LOG is unset.
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "reviewweb=warn",
        1 => "reviewweb=info,tower_http=info",
        2 => "reviewweb=debug,tower_http=debug,rmcp=info",
        _ => "trace",
    }
}

/// Initialize tracing subscriber with env filter
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing(verbosity: u8) {
    let _ = tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(verbosity).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_raises_level() {
        assert_eq!(default_filter(0), "reviewweb=warn");
        assert!(default_filter(1).starts_with("reviewweb=info"));
        assert!(default_filter(2).starts_with("reviewweb=debug"));
        assert_eq!(default_filter(7), "trace");
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init_tracing(0);
        init_tracing(3);
    }
}
