use crate::client::builder::TtsClientBuilder;
use crate::transport::HttpTransport;
use crate::types::OptionalFieldPolicy;
use crate::Result;
use std::sync::Arc;

pub(crate) const SPEECH_PATH: &str = "/audio/speech";
pub(crate) const STREAM_PATH: &str = "/audio/stream";
pub(crate) const VOICES_PATH: &str = "/voices/list";
pub(crate) const BALANCE_PATH: &str = "/balance";

/// Client for the TTS API.
///
/// Cloning is cheap: clones share one [`HttpTransport`], which only carries immutable
/// configuration, so a single client can serve many concurrent calls.
#[derive(Clone)]
pub struct TtsClient {
    pub(crate) transport: Arc<HttpTransport>,
    pub(crate) field_policy: OptionalFieldPolicy,
}

impl TtsClient {
    pub fn builder() -> TtsClientBuilder {
        TtsClientBuilder::new()
    }

    /// Build a client with an explicit API key and default settings.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        TtsClientBuilder::new().api_key(api_key).build()
    }

    /// Build a client configured entirely from the environment (`TTS_API_KEY`, ...).
    pub fn from_env() -> Result<Self> {
        TtsClientBuilder::new().build()
    }

    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    pub fn optional_field_policy(&self) -> OptionalFieldPolicy {
        self.field_policy
    }
}

impl std::fmt::Debug for TtsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtsClient")
            .field("base_url", &self.base_url())
            .field("field_policy", &self.field_policy)
            .finish()
    }
}
