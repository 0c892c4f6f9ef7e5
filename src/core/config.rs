//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Leptos' own settings (site address, site root) still come from
//! `[package.metadata.leptos]` and the `LEPTOS_*` overrides.

/// Tracing filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Tracing filter directive
    /// Example: info,tower_http=debug
    pub log_filter: Option<String>,

    /// Compress responses with brotli/gzip
    pub compression: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var("RUST_LOG").ok(),
            std::env::var("SHORTSPLIT_COMPRESSION").ok().as_deref(),
        )
    }

    /// Build a config from raw variable values.
    pub fn from_values(log_filter: Option<String>, compression: Option<&str>) -> Self {
        Self {
            log_filter: log_filter.filter(|f| !f.trim().is_empty()),
            compression: compression.is_none_or(parse_flag),
        }
    }

    /// Filter directive to hand to the tracing subscriber
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: None,
            compression: true,
        }
    }
}

/// Anything except an explicit "off" value enables the flag.
fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "off" | "no"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Config Struct Tests (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.compression);
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_unset_values_use_defaults() {
        assert_eq!(Config::from_values(None, None), Config::default());
    }

    #[test]
    fn test_log_filter_is_used() {
        let config = Config::from_values(Some("debug,tower_http=trace".to_string()), None);
        assert_eq!(config.log_filter(), "debug,tower_http=trace");
    }

    #[test]
    fn test_blank_log_filter_falls_back() {
        let config = Config::from_values(Some("   ".to_string()), None);
        assert!(config.log_filter.is_none());
        assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_compression_disabled_values() {
        for value in ["0", "false", "FALSE", "off", " no "] {
            let config = Config::from_values(None, Some(value));
            assert!(!config.compression, "{value:?} should disable compression");
        }
    }

    #[test]
    fn test_compression_enabled_values() {
        for value in ["1", "true", "on", "yes", ""] {
            let config = Config::from_values(None, Some(value));
            assert!(config.compression, "{value:?} should enable compression");
        }
    }
}
