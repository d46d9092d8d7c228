use std::fmt;

use log::{debug, error, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use super::model::{Cue, CueSettings, WebVttDocument};
use super::timestamp::Timestamp;
use crate::errors::{ParseIssue, WebVttError};

// @module: Line-oriented WebVTT state machine

static MAGIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"^WEBVTT([ \t]+|$)").unwrap());
static ARROW: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*-->\s*").unwrap());
static NOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^NOTE([ \t]+|$)").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").unwrap());
static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\r|\n").unwrap());

/// Split on `\r\n`, `\r` or `\n`; a terminating line break yields no extra empty line
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = LINE_BREAK.split(text).collect();
    if lines.last().is_some_and(|last| last.is_empty()) {
        lines.pop();
    }
    lines
}

/// How parse issues are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Abort on the first issue
    Strict,
    /// Log the issue, recover and continue
    #[default]
    Lax,
}

impl ParseMode {
    pub fn from_strict(strict: bool) -> Self {
        if strict { Self::Strict } else { Self::Lax }
    }

    /// Report `issue` found at `line`.
    ///
    /// Returns an error only when the parse must stop. Illegal arrows in
    /// cue settings never stop it, since nothing needs recovering.
    pub fn report(&self, issue: ParseIssue, line: usize) -> Result<(), WebVttError> {
        if *self == ParseMode::Strict && issue != ParseIssue::IllegalArrowInSettings {
            error!("line {}: {}", line, issue.message());
            return Err(WebVttError::Parse { issue, line });
        }
        warn!("line {}: {}{}", line, issue.message(), issue.lax_suffix());
        Ok(())
    }
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => f.write_str("strict"),
            Self::Lax => f.write_str("lax"),
        }
    }
}

/// Parser state; cue data in flight lives in the state that needs it
#[derive(Debug)]
enum ParserState {
    Metadata,
    CueOrNote,
    /// An identifier line was read, timings are expected next
    CueTimings { id: String },
    /// Timings were read, payload lines are being buffered
    CuePayload { cue: Cue, lines: Vec<String> },
    NotePayload,
    /// Discarding lines until the next blank line
    Skip,
}

/// Single-use WebVTT parser
pub struct WebVttParser {
    mode: ParseMode,
    document: WebVttDocument,
}

impl WebVttParser {
    pub fn new(mode: ParseMode) -> Self {
        WebVttParser {
            mode,
            document: WebVttDocument::default(),
        }
    }

    /// Consume the whole text and return the document
    pub fn parse(mut self, text: &str) -> Result<WebVttDocument, WebVttError> {
        info!("parsing in {} mode", self.mode);

        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut lines = split_lines(text).into_iter();
        let first_line = lines.next().unwrap_or("");

        let mut state = match MAGIC.find(first_line) {
            Some(magic) => {
                self.document.head = Some(first_line[magic.end()..].to_string());
                ParserState::Metadata
            }
            None => {
                self.mode.report(ParseIssue::MagicPrefixMissing, 1)?;
                ParserState::CueOrNote
            }
        };

        for (index, line) in lines.enumerate() {
            state = self.step(state, line, index + 2)?;
        }

        // No trailing blank line after the last cue
        if let ParserState::CuePayload { cue, lines } = state {
            self.finalize_cue(cue, lines);
        }

        debug!(
            "parsed {} metadata keys and {} cues",
            self.document.metadata.len(),
            self.document.cues.len()
        );
        Ok(self.document)
    }

    fn step(&mut self, state: ParserState, line: &str, lineno: usize) -> Result<ParserState, WebVttError> {
        let next = match state {
            ParserState::Metadata => {
                if line.is_empty() {
                    ParserState::CueOrNote
                } else {
                    match line.split_once(':') {
                        Some((key, value)) => {
                            self.document
                                .metadata
                                .entry(key.to_string())
                                .or_default()
                                .push(skip_whitespace(value).to_string());
                        }
                        None => self.mode.report(ParseIssue::MalformedHeaderLine, lineno)?,
                    }
                    ParserState::Metadata
                }
            }

            ParserState::CueOrNote => {
                if line.is_empty() {
                    ParserState::CueOrNote
                } else if NOTE.is_match(line) {
                    if ARROW.is_match(line) {
                        self.mode.report(ParseIssue::IllegalArrowInComment, lineno)?;
                        ParserState::Skip
                    } else {
                        ParserState::NotePayload
                    }
                } else {
                    match split_arrow(line) {
                        None => ParserState::CueTimings { id: line.to_string() },
                        Some((before, after)) => self.parse_timings(None, before, after, lineno)?,
                    }
                }
            }

            ParserState::CueTimings { id } => match split_arrow(line) {
                None => {
                    self.mode.report(ParseIssue::InvalidCueTimings, lineno)?;
                    if line.is_empty() {
                        ParserState::CueOrNote
                    } else {
                        ParserState::Skip
                    }
                }
                Some((before, after)) => self.parse_timings(Some(id), before, after, lineno)?,
            },

            ParserState::CuePayload { cue, mut lines } => {
                if line.is_empty() {
                    self.finalize_cue(cue, lines);
                    ParserState::CueOrNote
                } else {
                    lines.push(line.to_string());
                    ParserState::CuePayload { cue, lines }
                }
            }

            ParserState::NotePayload => {
                if line.is_empty() {
                    ParserState::CueOrNote
                } else if ARROW.is_match(line) {
                    self.mode.report(ParseIssue::IllegalArrowInComment, lineno)?;
                    ParserState::Skip
                } else {
                    ParserState::NotePayload
                }
            }

            ParserState::Skip => {
                if line.is_empty() {
                    ParserState::CueOrNote
                } else {
                    ParserState::Skip
                }
            }
        };
        Ok(next)
    }

    /// Parse `<timestamp> --> <timestamp> [settings...]`, already split on the arrow
    fn parse_timings(
        &self,
        id: Option<String>,
        before: &str,
        after: &str,
        lineno: usize,
    ) -> Result<ParserState, WebVttError> {
        let Some(timestamp1) = Timestamp::parse(skip_whitespace(before)) else {
            self.mode.report(ParseIssue::InvalidFirstTimestamp, lineno)?;
            return Ok(ParserState::Skip);
        };

        let mut tokens = WHITESPACE.split(after);
        let Some(timestamp2) = tokens.next().and_then(Timestamp::parse) else {
            self.mode.report(ParseIssue::InvalidSecondTimestamp, lineno)?;
            return Ok(ParserState::Skip);
        };

        let mut settings = CueSettings::new();
        for setting in tokens.filter(|token| !token.is_empty()) {
            if ARROW.is_match(setting) {
                self.mode.report(ParseIssue::IllegalArrowInSettings, lineno)?;
            }
            let (key, value) = match setting.split_once(':') {
                Some((key, value)) => (key, Some(value.to_string())),
                None => (setting, None),
            };
            settings.entry(key.to_string()).or_default().push(value);
        }

        let mut cue = Cue::new(id, timestamp1, timestamp2);
        cue.settings = settings;
        Ok(ParserState::CuePayload { cue, lines: Vec::new() })
    }

    fn finalize_cue(&mut self, mut cue: Cue, lines: Vec<String>) {
        cue.payload = lines.join("\n");
        self.document.cues.push(cue);
    }
}

/// Parse WebVTT text into a document
pub fn parse(text: &str, mode: ParseMode) -> Result<WebVttDocument, WebVttError> {
    WebVttParser::new(mode).parse(text)
}

fn split_arrow(line: &str) -> Option<(&str, &str)> {
    ARROW
        .find(line)
        .map(|arrow| (&line[..arrow.start()], &line[arrow.end()..]))
}

fn skip_whitespace(txt: &str) -> &str {
    txt.trim_start_matches([' ', '\t'])
}
