use crate::webvtt::{Cue, Timestamp};

/// Build the media-fragment IRI `<video>#t=<start>,<end>`
pub fn fragment_iri(start: &Timestamp, end: &Timestamp, video: &str) -> String {
    format!("{}#t={},{}", video, start, end)
}

/// Fragment IRI covering the time range of `cue`
pub fn cue_fragment_iri(cue: &Cue, video: &str) -> String {
    fragment_iri(&cue.timestamp1, &cue.timestamp2, video)
}
