/*!
 * Tests for error types and conversions
 */

use linkedvtt::errors::{AppError, LinkError, ParseIssue, WebVttError};

#[test]
fn test_webVttError_parse_shouldDisplayLineAndMessage() {
    let error = WebVttError::Parse { issue: ParseIssue::InvalidFirstTimestamp, line: 12 };
    assert_eq!(error.to_string(), "line 12: invalid first timestamp");
    assert_eq!(error.line(), 12);
    assert_eq!(error.issue(), ParseIssue::InvalidFirstTimestamp);
}

#[test]
fn test_parseIssue_laxSuffix_shouldDescribeRecovery() {
    assert_eq!(ParseIssue::InvalidCueTimings.lax_suffix(), ", ignoring cue");
    assert_eq!(
        ParseIssue::MagicPrefixMissing.lax_suffix(),
        ", skipping metadata and looking for cue"
    );
    assert_eq!(ParseIssue::IllegalArrowInComment.lax_suffix(), "");
}

#[test]
fn test_linkError_shouldDisplayCorrectly() {
    assert_eq!(
        LinkError::DuplicateReservedMetadata("@base".to_string()).to_string(),
        "too many @base's in metadata"
    );
    assert_eq!(LinkError::MissingBaseIdentifier.to_string(), "Could not determine base IRI");
    assert_eq!(LinkError::MissingVideoIdentifier.to_string(), "Could not determine video IRI");
}

#[test]
fn test_appError_fromWebVttError_shouldWrapCorrectly() {
    let error: AppError = WebVttError::Parse { issue: ParseIssue::MagicPrefixMissing, line: 1 }.into();
    assert!(matches!(error, AppError::WebVtt(_)));
    assert!(error.to_string().contains("magic string 'WEBVTT' not found"));
}

#[test]
fn test_appError_fromLinkError_shouldWrapCorrectly() {
    let error: AppError = LinkError::MissingVideoIdentifier.into();
    assert!(matches!(error, AppError::Link(LinkError::MissingVideoIdentifier)));
}

#[test]
fn test_appError_fromIoError_shouldBeFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.vtt");
    let error: AppError = io_error.into();
    assert!(matches!(error, AppError::File(_)));
    assert!(error.to_string().contains("missing.vtt"));
}
