//! Voice catalog and account balance types, plus envelope unwrapping.

use crate::{Error, ErrorContext, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A voice entry from the catalog.
///
/// The server owns the schema; entries are kept as opaque JSON objects and the
/// common fields are exposed through getters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Voice(pub Map<String, Value>);

impl Voice {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn id(&self) -> Option<&str> {
        self.str_field("id")
    }

    pub fn name(&self) -> Option<&str> {
        self.str_field("name")
    }

    pub fn gender(&self) -> Option<&str> {
        self.str_field("gender")
    }

    pub fn model(&self) -> Option<&str> {
        self.str_field("model")
    }

    pub fn language(&self) -> Option<&str> {
        self.str_field("language")
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

/// Catalog filter accepted by `list_voices`.
///
/// The voices endpoint is always queried unfiltered; use [`VoiceFilter::matches`]
/// to narrow the returned list locally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoiceFilter {
    pub language: Option<String>,
    pub model: Option<String>,
}

impl VoiceFilter {
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.language.is_none() && self.model.is_none()
    }

    /// True when every set criterion equals the voice's field.
    pub fn matches(&self, voice: &Voice) -> bool {
        let lang_ok = self
            .language
            .as_deref()
            .map_or(true, |l| voice.language() == Some(l));
        let model_ok = self
            .model
            .as_deref()
            .map_or(true, |m| voice.model() == Some(m));
        lang_ok && model_ok
    }
}

/// Account credit balance.
///
/// Counts are kept as `f64` so both integer and fractional JSON numbers are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub total_credits: f64,
    pub used_credits: f64,
    pub remaining_credits: f64,
    pub overage_characters: f64,
    pub overage_amount_usd: f64,
    /// Any further fields the server includes.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Take the array stored under `field` in a JSON envelope.
pub(crate) fn unwrap_array_envelope<T>(mut doc: Value, field: &str) -> Result<Vec<T>>
where
    T: serde::de::DeserializeOwned,
{
    let payload = take_field(&mut doc, field)?;
    if !payload.is_array() {
        return Err(shape_error(field, "expected an array"));
    }
    serde_json::from_value(payload).map_err(|e| shape_error(field, e.to_string()))
}

/// Take the object stored under `field` in a JSON envelope.
pub(crate) fn unwrap_object_envelope<T>(mut doc: Value, field: &str) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let payload = take_field(&mut doc, field)?;
    if !payload.is_object() {
        return Err(shape_error(field, "expected an object"));
    }
    serde_json::from_value(payload).map_err(|e| shape_error(field, e.to_string()))
}

fn take_field(doc: &mut Value, field: &str) -> Result<Value> {
    doc.as_object_mut()
        .and_then(|obj| obj.remove(field))
        .ok_or_else(|| shape_error(field, "field missing from response envelope"))
}

fn shape_error(field: &str, details: impl Into<String>) -> Error {
    Error::format_with_context(
        format!("unexpected response envelope for '{}'", field),
        ErrorContext::new()
            .with_field_path(field)
            .with_details(details)
            .with_source("envelope"),
    )
}
