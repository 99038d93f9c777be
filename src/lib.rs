//! # tts-lib-rust
//!
//! Async client for a hosted text-to-speech HTTP API.
//!
//! ## Overview
//!
//! The client validates synthesis parameters locally, sends them as JSON with a bearer
//! token, and hands back audio either fully buffered or as a live byte stream. Two
//! metadata lookups cover the voice catalog and the account balance.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tts_lib_rust::{SynthesisRequest, TtsClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TtsClient::builder().api_key("your-api-key").build()?;
//!
//!     let request = SynthesisRequest::new("Hello, world!", "tts-1", "nova").with_lang("en-US");
//!     let audio = client.synthesize(&request).await?;
//!     println!("received {} bytes", audio.len());
//!
//!     // Streaming: returns once headers arrive, bytes follow.
//!     let stream = client.synthesize_stream(&request).await?;
//!     let mut file = tokio::fs::File::create("hello.mp3").await?;
//!     stream.pipe_to(&mut file).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client facade, builder and operations |
//! | [`config`] | Configuration resolution (explicit values, environment, defaults) |
//! | [`transport`] | Shared HTTP transport |
//! | [`types`] | Requests, audio results, voices and balance |
//!
//! ## Logging
//!
//! Diagnostics go through [`tracing`]. Every error returned by the client is also
//! emitted at `ERROR` level before it propagates.

pub mod client;
pub mod config;
pub mod transport;
pub mod types;

pub use client::{TtsClient, TtsClientBuilder};
pub use config::{ClientConfig, EnvSnapshot};
pub use types::{
    AudioOutput, AudioStream, Balance, OptionalFieldPolicy, SynthesisRequest, Voice, VoiceFilter,
    MAX_INPUT_CHARS,
};

use futures::Stream;
use std::pin::Pin;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// A unified pinned, boxed stream that emits `Result<T>`
pub type BoxStream<'a, T> = Pin<Box<dyn Stream<Item = Result<T>> + Send + 'a>>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
