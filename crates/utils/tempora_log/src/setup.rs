//! Function to setup logging in binaries.

use std::fmt::Write as _;

/// Crates that are too chatty below `warn` for a command-line tool.
const LOUD_CRATES: [&str; 2] = ["tiny_http", "ureq"];

/// The value of `RUST_LOG` (or `info` if unset), with [`LOUD_CRATES`] turned down unless
/// the user already said something about them.
pub fn default_log_filter() -> String {
    filter_from(std::env::var("RUST_LOG").ok())
}

fn filter_from(rust_log: Option<String>) -> String {
    let mut rust_log = rust_log
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| "info".to_owned());

    for loud_crate in LOUD_CRATES {
        if !rust_log.contains(&format!("{loud_crate}=")) {
            write!(rust_log, ",{loud_crate}=warn").ok();
        }
    }

    rust_log
}

/// Logs to stderr, filtered by [`default_log_filter`].
///
/// Calling this more than once is harmless; only the first call installs a logger.
pub fn setup_logging() {
    let mut builder = env_logger::Builder::new();
    builder.parse_filters(&default_log_filter());
    if builder.try_init().is_err() {
        log::debug!("A logger was already installed");
    }
}
