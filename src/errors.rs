/*!
 * Error types for the linkedvtt converter.
 *
 * This module contains custom error types for the two pipeline stages,
 * using the thiserror crate for ergonomic error definitions:
 * - `WebVttError`: a strict-mode parse abort, carrying the offending line
 * - `LinkError`: conditions under which no linked document can be assembled
 * - `AppError`: wraps both for the command surface
 */

use std::fmt;

use thiserror::Error;

/// Conditions the WebVTT parser reports.
///
/// In lax mode they are logged and the parser recovers; in strict mode
/// each one aborts the parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseIssue {
    /// First line does not start with the `WEBVTT` magic string
    MagicPrefixMissing,
    /// Header line without a `:` separator
    MalformedHeaderLine,
    /// `-->` found inside a NOTE block
    IllegalArrowInComment,
    /// Line following a cue identifier carries no timing arrow
    InvalidCueTimings,
    /// Start timestamp does not match the timestamp grammar
    InvalidFirstTimestamp,
    /// End timestamp does not match the timestamp grammar
    InvalidSecondTimestamp,
    /// `-->` found inside a cue setting
    IllegalArrowInSettings,
}

impl ParseIssue {
    /// Message shared by warnings and errors
    pub fn message(&self) -> &'static str {
        match self {
            Self::MagicPrefixMissing => "magic string 'WEBVTT' not found at start",
            Self::MalformedHeaderLine => "ignoring malformed metadata header",
            Self::IllegalArrowInComment => "illegal '-->' in comment",
            Self::InvalidCueTimings => "invalid cue timings line",
            Self::InvalidFirstTimestamp => "invalid first timestamp",
            Self::InvalidSecondTimestamp => "invalid second timestamp",
            Self::IllegalArrowInSettings => "illegal '-->' in cue settings",
        }
    }

    /// Recovery note appended to the message in lax mode only
    pub fn lax_suffix(&self) -> &'static str {
        match self {
            Self::MagicPrefixMissing => ", skipping metadata and looking for cue",
            Self::InvalidCueTimings
            | Self::InvalidFirstTimestamp
            | Self::InvalidSecondTimestamp => ", ignoring cue",
            Self::MalformedHeaderLine
            | Self::IllegalArrowInComment
            | Self::IllegalArrowInSettings => "",
        }
    }
}

impl fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Errors raised while parsing WebVTT text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WebVttError {
    /// Strict-mode abort
    #[error("line {line}: {issue}")]
    Parse {
        /// What was wrong
        issue: ParseIssue,
        /// 1-based line number
        line: usize,
    },
}

impl WebVttError {
    /// Line number the parse stopped at
    pub fn line(&self) -> usize {
        match self {
            Self::Parse { line, .. } => *line,
        }
    }

    /// The reported condition
    pub fn issue(&self) -> ParseIssue {
        match self {
            Self::Parse { issue, .. } => *issue,
        }
    }
}

/// Errors raised while assembling the linked-data document.
///
/// These are fatal regardless of the parse mode.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    /// A singleton reserved metadata key was declared more than once
    #[error("too many {0}'s in metadata")]
    DuplicateReservedMetadata(String),

    /// Neither the metadata nor the caller provided a base IRI
    #[error("Could not determine base IRI")]
    MissingBaseIdentifier,

    /// Neither the metadata nor the caller provided a video IRI
    #[error("Could not determine video IRI")]
    MissingVideoIdentifier,
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from configuration loading or validation
    #[error("Config error: {0}")]
    Config(String),

    /// Error from the WebVTT parser
    #[error("WebVTT error: {0}")]
    WebVtt(#[from] WebVttError),

    /// Error from graph assembly
    #[error("Link error: {0}")]
    Link(#[from] LinkError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}
