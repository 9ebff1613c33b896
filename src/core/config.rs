use std::env;
use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;

use crate::errors::SummarizeError;

pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Environment variable that switches the service into mock mode when set to `1`.
pub const MOCK_SUMMARY_VAR: &str = "MOCK_SUMMARY";

#[derive(Debug)]
pub struct AppConfig {
    pub gemini_api_key: SecretString,
    pub gemini_api_base: String,
    pub host: IpAddr,
    pub port: u16,
    pub max_body_bytes: usize,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, SummarizeError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Fails when `GEMINI_API_KEY` is absent or blank, or when one of the
    /// optional numeric/address settings does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SummarizeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let gemini_api_key = lookup("GEMINI_API_KEY")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| SummarizeError::ConfigError("GEMINI_API_KEY is not set".to_string()))?;

        let gemini_api_base = lookup("GEMINI_API_BASE")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_GEMINI_API_BASE.to_string());

        let host = match lookup("HOST") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| SummarizeError::ConfigError(format!("HOST: {e}")))?,
            None => IpAddr::from([0, 0, 0, 0]),
        };

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| SummarizeError::ConfigError(format!("PORT: {e}")))?,
            None => DEFAULT_PORT,
        };

        let max_body_bytes = match lookup("MAX_BODY_BYTES") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| SummarizeError::ConfigError(format!("MAX_BODY_BYTES: {e}")))?,
            None => DEFAULT_MAX_BODY_BYTES,
        };

        Ok(Self {
            gemini_api_key: SecretString::new(gemini_api_key),
            gemini_api_base,
            host,
            port,
            max_body_bytes,
        })
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Source of the per-request mock toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockSwitch {
    /// Re-read `MOCK_SUMMARY` every time.
    Env,
    Fixed(bool),
}

impl MockSwitch {
    #[must_use]
    pub fn is_enabled(self) -> bool {
        match self {
            MockSwitch::Env => env::var(MOCK_SUMMARY_VAR)
                .map(|v| v.trim() == "1")
                .unwrap_or(false),
            MockSwitch::Fixed(enabled) => enabled,
        }
    }
}
