//! Log setup for the `frontmeta` binary.
//!
//! The library crates log through the `log` facade; the subscriber installed
//! here picks those records up and writes them to stderr, keeping stdout for
//! scan output.

use tracing_subscriber::EnvFilter;

/// Pick the filter directive from `-v` count and the configured level.
///
/// Any `-v` wins over the config file.
pub fn level_directive(verbose: u8, configured: &str) -> String {
    match verbose {
        0 => configured.to_lowercase(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG` overrides both `-v` and the config file. Calling this more than
/// once is harmless; later calls are ignored.
pub fn init_logging(verbose: u8, configured: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_directive(verbose, configured)));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();

    if result.is_err() {
        tracing::debug!("Logging already initialized");
    }
}
