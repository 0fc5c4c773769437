//! Console logging setup shared by the desktop app and the CLI.
//!
//! `RUST_LOG` always wins; otherwise the filter comes from the `-v` count.
//!
//! ```bash
//! folio-hero -vv type                                  # debug
//! RUST_LOG=folio_core::typewriter=trace folio-hero type
//! ```

use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count.
pub fn filter_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global fmt subscriber. Logs go to stderr so stdout stays
/// clean for typewriter frames.
pub fn setup_logging(verbosity: u8) {
    let filter = filter_for(verbosity);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(verbosity >= 2)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(filter_for(0), "warn");
        assert_eq!(filter_for(1), "info");
        assert_eq!(filter_for(2), "debug");
        assert_eq!(filter_for(3), "trace");
        assert_eq!(filter_for(9), "trace");
    }
}
