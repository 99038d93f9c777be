//! Request and response types.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`speech`] | Synthesis request, validation and wire body |
//! | [`audio`] | Buffered and streamed audio results |
//! | [`account`] | Voice catalog and balance |

pub mod account;
pub mod audio;
pub mod speech;

pub use account::{Balance, Voice, VoiceFilter};
pub use audio::{AudioOutput, AudioStream};
pub use speech::{OptionalFieldPolicy, SpeechBody, SynthesisRequest, MAX_INPUT_CHARS};
