//! Synthesis request: parameter validation and wire body construction.

use crate::{Error, ErrorContext, Result};
use serde::Serialize;

/// Maximum length of `input`, counted in characters.
pub const MAX_INPUT_CHARS: usize = 5000;

/// How optional fields are carried onto the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OptionalFieldPolicy {
    /// Send every field that is `Some`, including `""` and `0.0`.
    #[default]
    Presence,
    /// Drop empty strings and a zero `styleDegree`, matching older clients of this API.
    Truthy,
}

/// Parameters of a single synthesis call.
///
/// `input`, `model` and `voice` are required and must be non-empty. Optional fields that
/// are `None` are omitted from the request body entirely.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SynthesisRequest {
    pub input: String,
    pub model: String,
    pub voice: String,
    pub pitch: Option<String>,
    pub style: Option<String>,
    /// Style intensity, conventionally 0.5..=2.0 (not enforced).
    pub style_degree: Option<f64>,
    /// BCP-47 language tag.
    pub lang: Option<String>,
}

impl SynthesisRequest {
    pub fn new(
        input: impl Into<String>,
        model: impl Into<String>,
        voice: impl Into<String>,
    ) -> Self {
        Self {
            input: input.into(),
            model: model.into(),
            voice: voice.into(),
            ..Self::default()
        }
    }

    pub fn with_pitch(mut self, pitch: impl Into<String>) -> Self {
        self.pitch = Some(pitch.into());
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn with_style_degree(mut self, degree: f64) -> Self {
        self.style_degree = Some(degree);
        self
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    /// Check the required fields. Pure; performs no I/O.
    pub fn validate(&self) -> Result<()> {
        if self.input.is_empty() {
            return Err(invalid("input", "input is required and must be a non-empty string"));
        }
        let len = self.input.chars().count();
        if len > MAX_INPUT_CHARS {
            return Err(Error::validation_with_context(
                format!("input must be at most {} characters", MAX_INPUT_CHARS),
                ErrorContext::new()
                    .with_field_path("input")
                    .with_details(format!("got {} characters", len))
                    .with_source("request_validator"),
            ));
        }
        if self.model.is_empty() {
            return Err(invalid("model", "model is required and must be a non-empty string"));
        }
        if self.voice.is_empty() {
            return Err(invalid("voice", "voice is required and must be a non-empty string"));
        }
        if let Some(degree) = self.style_degree.filter(|d| !d.is_finite()) {
            return Err(Error::validation_with_context(
                "styleDegree must be a finite number",
                ErrorContext::new()
                    .with_field_path("styleDegree")
                    .with_details(format!("got {}", degree))
                    .with_source("request_validator"),
            ));
        }
        Ok(())
    }

    /// Validate and build the JSON body sent to the speech endpoints.
    pub fn to_body(&self, policy: OptionalFieldPolicy) -> Result<SpeechBody<'_>> {
        self.validate()?;

        let style_degree = match (policy, self.style_degree) {
            (OptionalFieldPolicy::Truthy, Some(d)) if d == 0.0 => None,
            (_, d) => d,
        };

        Ok(SpeechBody {
            input: &self.input,
            model: &self.model,
            voice: &self.voice,
            pitch: keep_str(self.pitch.as_deref(), policy),
            style: keep_str(self.style.as_deref(), policy),
            style_degree,
            lang: keep_str(self.lang.as_deref(), policy),
        })
    }
}

fn keep_str(value: Option<&str>, policy: OptionalFieldPolicy) -> Option<&str> {
    match (policy, value) {
        (OptionalFieldPolicy::Truthy, Some("")) => None,
        (_, v) => v,
    }
}

fn invalid(field: &str, msg: &str) -> Error {
    Error::validation_with_context(
        msg,
        ErrorContext::new()
            .with_field_path(field)
            .with_source("request_validator"),
    )
}

/// Normalized wire body for `/audio/speech` and `/audio/stream`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeechBody<'a> {
    pub input: &'a str,
    pub model: &'a str,
    pub voice: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pitch: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<&'a str>,
    #[serde(rename = "styleDegree", skip_serializing_if = "Option::is_none")]
    pub style_degree: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<&'a str>,
}
