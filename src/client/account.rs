//! Voice catalog and balance lookups.

use super::core::{TtsClient, BALANCE_PATH, VOICES_PATH};
use crate::types::account::{unwrap_array_envelope, unwrap_object_envelope};
use crate::types::{Balance, Voice, VoiceFilter};
use crate::Result;
use tracing::debug;

impl TtsClient {
    /// List the voice catalog.
    ///
    /// `filter` is accepted but not sent: the endpoint always returns the full catalog.
    /// Narrow the result with [`VoiceFilter::matches`] if needed.
    pub async fn list_voices(&self, filter: Option<&VoiceFilter>) -> Result<Vec<Voice>> {
        if let Some(f) = filter.filter(|f| !f.is_empty()) {
            debug!(filter = ?f, "voice filter is not forwarded to the server");
        }
        self.fetch_voices()
            .await
            .map_err(|e| e.logged("list_voices"))
    }

    /// Fetch the account's credit balance.
    pub async fn balance(&self) -> Result<Balance> {
        self.fetch_balance()
            .await
            .map_err(|e| e.logged("balance"))
    }

    async fn fetch_voices(&self) -> Result<Vec<Voice>> {
        let doc = self.transport.get_json(VOICES_PATH).await?;
        unwrap_array_envelope(doc, "voices")
    }

    async fn fetch_balance(&self) -> Result<Balance> {
        let doc = self.transport.get_json(BALANCE_PATH).await?;
        unwrap_object_envelope(doc, "balance")
    }
}
