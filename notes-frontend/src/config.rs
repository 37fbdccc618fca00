use std::env;
use std::time::Duration;

/// Environment variable names - single source of truth
pub mod env_vars {
    /// Base URL of the notes service (e.g. "http://localhost:8000").
    /// Empty or unset means paths are used relative to the default origin.
    pub const API_BASE_URL: &str = "NOTES_API_BASE_URL";
    pub const SEARCH_DEBOUNCE_MS: &str = "NOTES_SEARCH_DEBOUNCE_MS";
    pub const STATUS_CLEAR_MS: &str = "NOTES_STATUS_CLEAR_MS";
}

/// Default values
pub mod defaults {
    /// Origin used to resolve relative API paths; a terminal process has no page origin.
    pub const ORIGIN: &str = "http://localhost:8000";
    pub const SEARCH_DEBOUNCE_MS: u64 = 200;
    pub const STATUS_CLEAR_MS: u64 = 2500;
}

/// Timer windows used by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Quiet period after the last search keystroke before the filter runs
    pub search_debounce: Duration,
    /// How long a status message stays up before clearing itself
    pub status_clear: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            search_debounce: Duration::from_millis(defaults::SEARCH_DEBOUNCE_MS),
            status_clear: Duration::from_millis(defaults::STATUS_CLEAR_MS),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL with trailing slashes removed; empty when unset
    pub api_base_url: String,
    pub timings: Timings,
}

impl Config {
    pub fn from_env() -> Self {
        let api_base_url = env::var(env_vars::API_BASE_URL)
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .unwrap_or_default();

        Self {
            api_base_url,
            timings: Timings {
                search_debounce: millis_from_env(
                    env_vars::SEARCH_DEBOUNCE_MS,
                    defaults::SEARCH_DEBOUNCE_MS,
                ),
                status_clear: millis_from_env(env_vars::STATUS_CLEAR_MS, defaults::STATUS_CLEAR_MS),
            },
        }
    }
}

fn millis_from_env(var: &str, default: u64) -> Duration {
    let ms = match env::var(var) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("{} is not a number ({:?}), using {}ms", var, raw, default);
            default
        }),
        Err(_) => default,
    };
    Duration::from_millis(ms)
}
