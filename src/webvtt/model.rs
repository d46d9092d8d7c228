/*!
 * Parsed WebVTT document model.
 *
 * The parser produces a `WebVttDocument` once per call; nothing here is
 * mutated after parsing completes. Serialization follows the JSON shape
 * `{"webvtt-head", "metadata", "cues"}`.
 */

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use super::timestamp::Timestamp;

/// Header metadata: every key keeps all its values in encounter order
pub type RawMetadata = BTreeMap<String, Vec<String>>;

/// Cue settings: every key keeps all its values, a value may be absent
pub type CueSettings = BTreeMap<String, Vec<Option<String>>>;

/// A complete parse result
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WebVttDocument {
    /// Text following the magic string, `None` when the magic was missing
    #[serde(rename = "webvtt-head")]
    pub head: Option<String>,

    /// Header key/value pairs
    pub metadata: RawMetadata,

    /// Cues in input order
    pub cues: Vec<Cue>,
}

/// One finalized cue
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cue {
    /// Explicit cue identifier line, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Start time
    pub timestamp1: Timestamp,

    /// End time
    pub timestamp2: Timestamp,

    /// Settings following the end timestamp
    pub settings: CueSettings,

    /// Payload lines joined with `\n`
    pub payload: String,
}

impl Cue {
    pub fn new(id: Option<String>, timestamp1: Timestamp, timestamp2: Timestamp) -> Self {
        Cue {
            id,
            timestamp1,
            timestamp2,
            settings: CueSettings::new(),
            payload: String::new(),
        }
    }

    /// First value recorded for a setting, when that value is present
    pub fn first_setting(&self, key: &str) -> Option<&str> {
        self.settings
            .get(key)
            .and_then(|values| values.first())
            .and_then(|value| value.as_deref())
    }

    /// Classify the payload text
    pub fn classify_payload(&self) -> Payload {
        Payload::classify(&self.payload)
    }
}

/// A cue payload is either plain text or an embedded JSON value
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Text(String),
    Structured(Value),
}

impl Payload {
    /// Try to decode `raw` as JSON, falling back to plain text
    pub fn classify(raw: &str) -> Self {
        match serde_json::from_str::<Value>(raw) {
            Ok(value) => Payload::Structured(value),
            Err(_) => Payload::Text(raw.to_string()),
        }
    }

    /// The payload as a JSON value, text becoming a JSON string
    pub fn into_value(self) -> Value {
        match self {
            Payload::Text(text) => Value::String(text),
            Payload::Structured(value) => value,
        }
    }
}
