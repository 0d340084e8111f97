//! Client configuration sourced from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Runtime configuration for the terminal client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the game backend, e.g. `http://127.0.0.1:8000/api`.
    pub api_url: String,
    /// Per-request timeout.
    pub request_timeout: Duration,
    /// File that receives tracing output while the TUI owns the terminal.
    pub log_file: PathBuf,
}

impl ClientConfig {
    /// Build the configuration from the environment, falling back to
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        Self {
            api_url: env::var("LIFE_RPG_API_URL")
                .unwrap_or_else(|_| liferpg_api::DEFAULT_BASE_URL.to_string()),
            request_timeout: Duration::from_secs(read_env("LIFE_RPG_REQUEST_TIMEOUT_SECS", 120)),
            log_file: PathBuf::from(
                env::var("LIFE_RPG_LOG_FILE").unwrap_or_else(|_| "liferpg.log".to_string()),
            ),
        }
    }
}

/// Read an environment variable and parse it, returning the default when the
/// variable is unset or fails to parse.
fn read_env<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_env_falls_back_on_garbage() {
        // Key chosen to be absent from any real environment.
        assert_eq!(read_env("LIFE_RPG_TEST_UNSET_KEY_XYZZY", 42u64), 42);
    }
}
