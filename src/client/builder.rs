use crate::client::core::TtsClient;
use crate::config::{ClientConfig, EnvSnapshot};
use crate::transport::HttpTransport;
use crate::types::OptionalFieldPolicy;
use crate::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Builder for creating clients with custom configuration.
///
/// Explicit values win over the environment; the environment is read once, at build time.
#[derive(Debug, Default)]
pub struct TtsClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    field_policy: OptionalFieldPolicy,
}

impl TtsClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the API base URL (also handy for pointing at a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Whole-request timeout. Unset means the transport default (no timeout), which also
    /// leaves long audio streams uninterrupted.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Choose how optional synthesis fields are carried onto the wire.
    pub fn optional_field_policy(mut self, policy: OptionalFieldPolicy) -> Self {
        self.field_policy = policy;
        self
    }

    /// Build the client, falling back to the process environment for unset values.
    pub fn build(self) -> Result<TtsClient> {
        let env = EnvSnapshot::capture();
        self.build_with_env(&env)
    }

    /// Build the client against an explicit environment snapshot.
    pub fn build_with_env(self, env: &EnvSnapshot) -> Result<TtsClient> {
        let config = ClientConfig::resolve(self.api_key, self.base_url, self.timeout, env)
            .and_then(|config| HttpTransport::new(&config).map(|t| (config, t)))
            .map_err(|e| e.logged("build_client"));
        let (config, transport) = config?;

        info!(base_url = %config.base_url, "tts client initialized");
        Ok(TtsClient {
            transport: Arc::new(transport),
            field_policy: self.field_policy,
        })
    }
}
