//! Environment variable helpers for runtime configuration.
//!
//! ```ignore
//! use crate::env::{env_get, env_get_bool};
//!
//! let level: String = env_get("CERROR_LOG_LEVEL", "info".to_string());
//! let flush: bool = env_get_bool("CERROR_FLUSH_EPRINT", false);
//! ```

use std::str::FromStr;

/// Parse an environment variable as `T`, or return `default` if it is unset
/// or fails to parse.
#[inline]
pub fn env_get<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Boolean variable: "1", "true", "yes", "on" (any case) are true, any other
/// value is false, unset returns `default`.
#[inline]
pub fn env_get_bool(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(val) => parse_bool(&val),
        Err(_) => default,
    }
}

fn parse_bool(val: &str) -> bool {
    matches!(
        val.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_values() {
        for v in ["1", "true", "YES", " on "] {
            assert!(parse_bool(v), "{}", v);
        }
        for v in ["0", "false", "off", "", "maybe"] {
            assert!(!parse_bool(v), "{}", v);
        }
    }

    #[test]
    fn unset_returns_default() {
        let key = "CERROR_TEST_SURELY_UNSET_9F3A";
        assert_eq!(env_get(key, 7u32), 7);
        assert!(env_get_bool(key, true));
        assert!(!env_get_bool(key, false));
    }
}
