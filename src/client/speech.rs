//! Buffered and streaming synthesis.

use super::core::{TtsClient, SPEECH_PATH, STREAM_PATH};
use crate::transport::TransportError;
use crate::types::audio::content_type_of;
use crate::types::{AudioOutput, AudioStream, SynthesisRequest};
use crate::Result;

const AUDIO_MPEG: &str = "audio/mpeg";

impl TtsClient {
    /// Synthesize `request` and return the whole audio payload in memory.
    ///
    /// Parameters are validated before any request is sent. A non-success status yields
    /// [`crate::Error::Api`]; a request that could not be sent, or a body that could not be
    /// read, yields [`crate::Error::Transport`]. No retries are attempted.
    pub async fn synthesize(&self, request: &SynthesisRequest) -> Result<AudioOutput> {
        self.synthesize_buffered(request)
            .await
            .map_err(|e| e.logged("synthesize"))
    }

    /// Synthesize `request` and return the audio as it is produced.
    ///
    /// Resolves as soon as the response headers arrive. Errors after that point are
    /// delivered through the returned [`AudioStream`].
    pub async fn synthesize_stream(&self, request: &SynthesisRequest) -> Result<AudioStream> {
        self.open_stream(request)
            .await
            .map_err(|e| e.logged("synthesize_stream"))
    }

    async fn synthesize_buffered(&self, request: &SynthesisRequest) -> Result<AudioOutput> {
        let body = request.to_body(self.field_policy)?;
        let response = self
            .transport
            .post_json(SPEECH_PATH, &body, AUDIO_MPEG)
            .await?;
        let content_type = content_type_of(&response);
        let data = response.bytes().await.map_err(TransportError::Http)?;
        Ok(AudioOutput {
            data: data.to_vec(),
            content_type,
        })
    }

    async fn open_stream(&self, request: &SynthesisRequest) -> Result<AudioStream> {
        let body = request.to_body(self.field_policy)?;
        let response = self
            .transport
            .post_json(STREAM_PATH, &body, AUDIO_MPEG)
            .await?;
        Ok(AudioStream::from_response(response))
    }
}
