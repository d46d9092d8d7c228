/*!
 * WebVTT timestamp grammar.
 *
 * Accepted form is `[[H+:]MM:]SS.fff` where `fff` is exactly three digits.
 * A lone seconds component is normalized into hours, minutes and seconds;
 * with two or three components the values are taken literally.
 */

use std::fmt;

use serde::ser::{Serialize, SerializeTuple, Serializer};

/// A parsed cue timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timestamp {
    /// Unbounded hours
    pub hours: u64,
    /// Minutes, expected below 60
    pub minutes: u64,
    /// Seconds, expected below 60
    pub seconds: u64,
    /// Milliseconds, 0-999
    pub fraction: u64,
}

impl Timestamp {
    pub fn new(hours: u64, minutes: u64, seconds: u64, fraction: u64) -> Self {
        Timestamp {
            hours,
            minutes,
            seconds,
            fraction,
        }
    }

    /// Parse a timestamp, returning `None` when `txt` does not match the grammar
    pub fn parse(txt: &str) -> Option<Self> {
        let dot = txt.len().checked_sub(4)?;
        if !txt.is_char_boundary(dot) || txt.as_bytes()[dot] != b'.' {
            return None;
        }
        let fraction = parse_component(&txt[dot + 1..])?;

        let values: Vec<&str> = txt[..dot].split(':').collect();
        match values.as_slice() {
            [total] => {
                let total = parse_component(total)?;
                let (minutes, seconds) = (total / 60, total % 60);
                let (hours, minutes) = (minutes / 60, minutes % 60);
                Some(Self::new(hours, minutes, seconds, fraction))
            }
            [minutes, seconds] => Some(Self::new(
                0,
                parse_component(minutes)?,
                parse_component(seconds)?,
                fraction,
            )),
            [hours, minutes, seconds] => Some(Self::new(
                parse_component(hours)?,
                parse_component(minutes)?,
                parse_component(seconds)?,
                fraction,
            )),
            _ => None,
        }
    }
}

fn parse_component(txt: &str) -> Option<u64> {
    if txt.is_empty() || !txt.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    txt.parse().ok()
}

/// Canonical media-fragment rendering: `MM:SS.fff`, or `HH:MM:SS.fff` when hours are set
impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hours == 0 {
            write!(f, "{:02}:{:02}.{:03}", self.minutes, self.seconds, self.fraction)
        } else {
            write!(
                f,
                "{:02}:{:02}:{:02}.{:03}",
                self.hours, self.minutes, self.seconds, self.fraction
            )
        }
    }
}

// Serialized as `[hours, minutes, seconds, fraction]`
impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(4)?;
        tuple.serialize_element(&self.hours)?;
        tuple.serialize_element(&self.minutes)?;
        tuple.serialize_element(&self.seconds)?;
        tuple.serialize_element(&self.fraction)?;
        tuple.end()
    }
}
