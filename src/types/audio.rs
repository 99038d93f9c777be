//! Audio results: a buffered payload and a live byte stream.

use crate::transport::TransportError;
use crate::{BoxStream, Error, Result};
use bytes::Bytes;
use futures::{Stream, StreamExt, TryStreamExt};
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};

/// A fully buffered audio payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioOutput {
    pub data: Vec<u8>,
    /// `Content-Type` reported by the server, if any.
    pub content_type: Option<String>,
}

impl AudioOutput {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

/// Live audio byte stream returned once response headers have arrived.
///
/// Chunks are yielded in transmission order. Failures after the headers were received
/// surface as `Err` items. Dropping the handle closes the connection.
pub struct AudioStream {
    inner: BoxStream<'static, Bytes>,
    content_type: Option<String>,
}

impl AudioStream {
    pub(crate) fn from_response(response: reqwest::Response) -> Self {
        let content_type = content_type_of(&response);
        let inner = response
            .bytes_stream()
            .map_err(|e| Error::Transport(TransportError::Http(e)));
        Self {
            inner: Box::pin(inner),
            content_type,
        }
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Drain the remaining chunks into memory.
    pub async fn collect_bytes(mut self) -> Result<AudioOutput> {
        let mut data = Vec::new();
        while let Some(chunk) = self.inner.next().await {
            data.extend_from_slice(&chunk?);
        }
        Ok(AudioOutput {
            data,
            content_type: self.content_type,
        })
    }

    /// Adapt the stream into an [`AsyncRead`].
    pub fn into_reader(self) -> impl AsyncRead + Send + Unpin {
        let inner = self
            .inner
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e));
        tokio_util::io::StreamReader::new(inner)
    }

    /// Copy every chunk into `writer`, returning the number of bytes written.
    pub async fn pipe_to<W>(mut self, writer: &mut W) -> Result<u64>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let mut written = 0u64;
        while let Some(chunk) = self.inner.next().await {
            let chunk = chunk?;
            writer.write_all(&chunk).await.map_err(io_error)?;
            written += chunk.len() as u64;
        }
        writer.flush().await.map_err(io_error)?;
        Ok(written)
    }
}

impl Stream for AudioStream {
    type Item = Result<Bytes>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.as_mut().poll_next(cx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl std::fmt::Debug for AudioStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioStream")
            .field("content_type", &self.content_type)
            .finish_non_exhaustive()
    }
}

pub(crate) fn content_type_of(response: &reqwest::Response) -> Option<String> {
    response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

fn io_error(e: std::io::Error) -> Error {
    Error::Transport(TransportError::Other(format!("failed to write audio: {}", e)))
}
