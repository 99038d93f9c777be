//! Client facade for the TTS HTTP API.
//!
//! `core` holds the client itself; `speech` and `account` add the synthesis and
//! metadata operations as separate `impl TtsClient` blocks.

pub mod account;
pub mod builder;
pub mod core;
pub mod speech;

pub use builder::TtsClientBuilder;
pub use core::TtsClient;
