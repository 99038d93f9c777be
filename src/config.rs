//! Client configuration and its resolution from explicit values and the environment.

use crate::{Error, ErrorContext, Result};
use std::time::Duration;

/// Base URL used when neither the builder nor the environment supplies one.
pub const DEFAULT_BASE_URL: &str = "https://api.tts-lib.dev/v1";

pub const API_KEY_ENV: &str = "TTS_API_KEY";
pub const BASE_URL_ENV: &str = "TTS_BASE_URL";
pub const TIMEOUT_ENV: &str = "TTS_HTTP_TIMEOUT_SECS";

/// Point-in-time copy of the environment variables the client understands.
///
/// This is the only place the process environment is read; everything downstream
/// works off the snapshot, which also lets tests resolve configuration without
/// touching global state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<String>,
}

impl EnvSnapshot {
    pub fn capture() -> Self {
        Self {
            api_key: std::env::var(API_KEY_ENV).ok(),
            base_url: std::env::var(BASE_URL_ENV).ok(),
            timeout_secs: std::env::var(TIMEOUT_ENV).ok(),
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }
}

/// Fully resolved, immutable client configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ClientConfig {
    /// Resolve configuration: explicit value, then environment snapshot, then default.
    ///
    /// Fails with [`Error::Configuration`] when no non-empty API key is available or the
    /// base URL does not parse.
    pub fn resolve(
        api_key: Option<String>,
        base_url: Option<String>,
        timeout: Option<Duration>,
        env: &EnvSnapshot,
    ) -> Result<Self> {
        let api_key = non_empty(api_key)
            .or_else(|| non_empty(env.api_key.clone()))
            .ok_or_else(|| {
                Error::configuration_with_context(
                    format!("API key not provided and {} not set", API_KEY_ENV),
                    ErrorContext::new()
                        .with_field_path("api_key")
                        .with_source("config_resolver"),
                )
            })?;

        let base_url = non_empty(base_url)
            .or_else(|| non_empty(env.base_url.clone()))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        url::Url::parse(&base_url).map_err(|e| {
            Error::configuration_with_context(
                format!("Invalid base URL '{}': {}", base_url, e),
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_source("config_resolver"),
            )
        })?;

        // An unparsable timeout in the environment is ignored rather than fatal.
        let timeout = timeout.or_else(|| {
            env.timeout_secs
                .as_deref()
                .and_then(|s| s.trim().parse::<u64>().ok())
                .map(Duration::from_secs)
        });

        Ok(Self {
            api_key,
            base_url,
            timeout,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
