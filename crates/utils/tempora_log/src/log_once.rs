use std::collections::HashSet;
use std::sync::LazyLock;

use parking_lot::Mutex;

static SEEN_MESSAGES: LazyLock<Mutex<HashSet<String>>> = LazyLock::new(Default::default);

/// Returns `true` the first time it is called with a given message, and `false` after that.
#[doc(hidden)]
pub fn should_log_once(message: &str) -> bool {
    SEEN_MESSAGES.lock().insert(message.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_log_once() {
        assert!(should_log_once("test_should_log_once: a"));
        assert!(!should_log_once("test_should_log_once: a"));
        assert!(should_log_once("test_should_log_once: b"));
    }
}
