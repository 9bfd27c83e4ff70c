//! Configuration handling for the application.
//!
//! Everything is read from environment variables at startup with development
//! defaults for anything that is not a secret. The two provider API keys have
//! no defaults: `Config::from_env` fails without them so a misconfigured
//! deployment dies at boot instead of on the first request.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Environment variable names. Keeping them public lets tests and deployment
/// tooling refer to them directly.
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_GEMINI_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_GEMINI_BASE_URL: &str = "GEMINI_BASE_URL";
pub const ENV_GEMINI_MODEL: &str = "GEMINI_MODEL";
pub const ENV_PERPLEXITY_API_KEY: &str = "PERPLEXITY_API_KEY";
pub const ENV_PERPLEXITY_BASE_URL: &str = "PERPLEXITY_BASE_URL";
pub const ENV_PERPLEXITY_MODEL: &str = "PERPLEXITY_MODEL";

/// Default development values used when environment variables are absent.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash-001";
const DEFAULT_PERPLEXITY_BASE_URL: &str = "https://api.perplexity.ai";
const DEFAULT_PERPLEXITY_MODEL: &str = "sonar";

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    bind_addr: String,
    gemini_api_key: String,
    gemini_base_url: String,
    gemini_model: String,
    perplexity_api_key: String,
    perplexity_base_url: String,
    perplexity_model: String,
}

impl Config {
    /// Load from environment variables, falling back to development defaults
    /// for everything except the provider API keys.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = env::var(ENV_BIND_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let gemini_api_key = env::var(ENV_GEMINI_API_KEY)
            .map_err(|_| ConfigError::MissingValue {
                field: ENV_GEMINI_API_KEY,
            })?;
        let gemini_base_url = env::var(ENV_GEMINI_BASE_URL)
            .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string());
        let gemini_model =
            env::var(ENV_GEMINI_MODEL).unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string());
        let perplexity_api_key =
            env::var(ENV_PERPLEXITY_API_KEY).map_err(|_| ConfigError::MissingValue {
                field: ENV_PERPLEXITY_API_KEY,
            })?;
        let perplexity_base_url = env::var(ENV_PERPLEXITY_BASE_URL)
            .unwrap_or_else(|_| DEFAULT_PERPLEXITY_BASE_URL.to_string());
        let perplexity_model = env::var(ENV_PERPLEXITY_MODEL)
            .unwrap_or_else(|_| DEFAULT_PERPLEXITY_MODEL.to_string());

        Ok(Self {
            bind_addr,
            gemini_api_key,
            gemini_base_url,
            gemini_model,
            perplexity_api_key,
            perplexity_base_url,
            perplexity_model,
        })
    }

    /// TCP bind address (host:port) for the HTTP server.
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }
    /// API key for the general-purpose conversion/sentiment provider.
    pub fn gemini_api_key(&self) -> &str {
        &self.gemini_api_key
    }
    /// Base URL of the general provider. Overridable so tests can point it
    /// at a local HTTP double.
    pub fn gemini_base_url(&self) -> &str {
        &self.gemini_base_url
    }
    pub fn gemini_model(&self) -> &str {
        &self.gemini_model
    }
    /// API key for the search-grounded scoring provider.
    pub fn perplexity_api_key(&self) -> &str {
        &self.perplexity_api_key
    }
    pub fn perplexity_base_url(&self) -> &str {
        &self.perplexity_base_url
    }
    pub fn perplexity_model(&self) -> &str {
        &self.perplexity_model
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    MissingValue { field: &'static str },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingValue { field } => {
                write!(f, "missing required environment variable '{}'", field)
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Ensure environment-variable manipulating tests run serially.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        for key in [
            ENV_BIND_ADDR,
            ENV_GEMINI_API_KEY,
            ENV_GEMINI_BASE_URL,
            ENV_GEMINI_MODEL,
            ENV_PERPLEXITY_API_KEY,
            ENV_PERPLEXITY_BASE_URL,
            ENV_PERPLEXITY_MODEL,
        ] {
            unsafe {
                env::remove_var(key);
            }
        }
    }

    fn set_required_keys() {
        unsafe {
            env::set_var(ENV_GEMINI_API_KEY, "gemini-test-key");
            env::set_var(ENV_PERPLEXITY_API_KEY, "pplx-test-key");
        }
    }

    #[test]
    fn fails_without_api_keys() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let err = Config::from_env().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingValue {
                field: ENV_GEMINI_API_KEY
            }
        ));
    }

    #[test]
    fn defaults_when_env_missing() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        set_required_keys();
        let cfg = Config::from_env().unwrap();
        assert_eq!(cfg.bind_addr(), super::DEFAULT_BIND_ADDR);
        assert_eq!(cfg.gemini_base_url(), super::DEFAULT_GEMINI_BASE_URL);
        assert_eq!(cfg.gemini_model(), super::DEFAULT_GEMINI_MODEL);
        assert_eq!(
            cfg.perplexity_base_url(),
            super::DEFAULT_PERPLEXITY_BASE_URL
        );
        assert_eq!(cfg.perplexity_model(), super::DEFAULT_PERPLEXITY_MODEL);
    }

    #[test]
    fn overrides_when_env_present() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        set_required_keys();
        unsafe {
            env::set_var(ENV_BIND_ADDR, "0.0.0.0:9000");
            env::set_var(ENV_GEMINI_BASE_URL, "http://localhost:4010");
            env::set_var(ENV_PERPLEXITY_MODEL, "sonar-pro");
        }
        let cfg = Config::from_env().unwrap();
        assert_eq!(cfg.bind_addr(), "0.0.0.0:9000");
        assert_eq!(cfg.gemini_base_url(), "http://localhost:4010");
        assert_eq!(cfg.perplexity_model(), "sonar-pro");
        assert_eq!(cfg.gemini_api_key(), "gemini-test-key");
    }
}
