//! Text logging (nothing to do with the clocks themselves) for use in the Tempora crates.
//!
//! * `trace`: spammy things
//! * `debug`: things that might be useful when debugging
//! * `info`: things that we want to show to users
//! * `warn`: problems that we can recover from
//! * `error`: problems that lead to loss of functionality or data
//!
//! The `warn_once` etc macros are for when you want to suppress repeated
//! logging of the exact same message.
//!
//! ## Feature flags
#![doc = document_features::document_features!()]
//!

mod log_once;
mod result_extensions;

#[cfg(all(feature = "setup", not(target_arch = "wasm32")))]
mod setup;

pub use log::{debug, error, info, trace, warn};

pub use self::result_extensions::ResultExt;

#[cfg(all(feature = "setup", not(target_arch = "wasm32")))]
pub use self::setup::{default_log_filter, setup_logging};

#[doc(hidden)]
pub mod __private {
    pub use crate::log_once::should_log_once;
    pub use log;
}

/// Log a warning, but only the first time this exact message is seen.
#[macro_export]
macro_rules! warn_once {
    ($($arg:tt)+) => {{
        let message = ::std::format!($($arg)+);
        if $crate::__private::should_log_once(&message) {
            $crate::__private::log::warn!("{message}");
        }
    }};
}

/// Log an error, but only the first time this exact message is seen.
#[macro_export]
macro_rules! error_once {
    ($($arg:tt)+) => {{
        let message = ::std::format!($($arg)+);
        if $crate::__private::should_log_once(&message) {
            $crate::__private::log::error!("{message}");
        }
    }};
}
