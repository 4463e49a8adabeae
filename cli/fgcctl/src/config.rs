//! Logging configuration from the environment.
//!
//! Output format and seed are flags with `FGC_FORMAT` / `FGC_SEED` fallbacks,
//! handled by clap in `commands`.

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log filter directive (trace, debug, info, warn, error, or a full
    /// `EnvFilter` expression).
    pub log_filter: String,

    /// Emit logs as JSON lines instead of text.
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_string(),
            log_json: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its
    /// value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let log_filter = lookup("FGC_LOG").unwrap_or(defaults.log_filter);

        let log_json = lookup("FGC_LOG_FORMAT").is_some_and(|v| v.eq_ignore_ascii_case("json"));

        Self {
            log_filter,
            log_json,
        }
    }
}
