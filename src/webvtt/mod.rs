/*!
 * WebVTT parsing.
 *
 * - `timestamp`: the `[[H+:]MM:]SS.fff` grammar and its canonical rendering
 * - `model`: the parsed document, cues and payload classification
 * - `parser`: the line-oriented state machine with strict/lax handling
 */

pub mod model;
pub mod parser;
pub mod timestamp;

pub use model::{Cue, CueSettings, Payload, RawMetadata, WebVttDocument};
pub use parser::{parse, ParseMode, WebVttParser};
pub use timestamp::Timestamp;
