//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// `log_level` is an `EnvFilter` directive string (the value of `RUST_LOG`);
/// invalid directives fall back to `info`. `log_format` selects between the
/// human-readable `text` formatter and newline-delimited `json`.
pub fn init_tracing(log_level: &str, log_format: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if log_format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
