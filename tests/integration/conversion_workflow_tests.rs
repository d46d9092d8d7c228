/*!
 * Integration tests for the parse then assemble workflow
 */

use anyhow::Result;
use serde_json::json;

use linkedvtt::app_config::Config;
use linkedvtt::file_utils::FileManager;
use linkedvtt::{convert, AppError, LinkError, ParseIssue, ParseMode, WebVttError};
use crate::common;

/// Test the reference example end to end
#[test]
fn test_convert_withHelloDocument_shouldMatchExpectedJsonLd() -> Result<()> {
    let linked = convert(common::HELLO_VTT, ParseMode::Strict, &common::options("http://x/", "v.mp4", false))?;
    let json = serde_json::to_value(&linked)?;

    assert_eq!(json["cues"][0]["fragment"], "http://x/v.mp4#t=00:01.000,00:02.000");
    assert_eq!(
        json["cues"][0]["@graph"],
        json!({"@id": "http://x/v.mp4#t=00:01.000,00:02.000", "annotation": "Hello"})
    );
    Ok(())
}

/// Test a file-based workflow using the configuration defaults
#[test]
fn test_convert_withFileInput_shouldResolveVideoAgainstFileBase() -> Result<()> {
    common::init_logging();
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "subs.vtt", common::HELLO_VTT)?;

    let config = Config {
        default_video: "movie.mp4".to_string(),
        flatten: true,
        ..Config::default()
    };
    let text = FileManager::read_input(Some(path.as_path()))?;
    let base = FileManager::base_iri_for(Some(path.as_path()))?;
    let linked = convert(&text, config.parse_mode(), &config.link_options(Some(base.clone())))?;

    assert_eq!(linked.id, base);
    assert!(linked.video.starts_with("file://"));
    assert!(linked.video.ends_with("/movie.mp4"));
    assert_eq!(
        linked.cues[0].fragment.iri(),
        Some(format!("{}#t=00:01.000,00:02.000", linked.video).as_str())
    );
    Ok(())
}

/// Test strict mode aborting the whole conversion
#[test]
fn test_convert_withStrictModeAndBadTiming_shouldReturnParseError() {
    let text = "WEBVTT\n\n00:01.000 --> 00:02.000\nok\n\nbroken\nnope\n";
    let err = convert(text, ParseMode::Strict, &common::options("http://x/", "v.mp4", false)).unwrap_err();

    match err {
        AppError::WebVtt(WebVttError::Parse { issue, line }) => {
            assert_eq!(issue, ParseIssue::InvalidCueTimings);
            assert_eq!(line, 7);
        }
        other => panic!("unexpected error: {}", other),
    }
}

/// Test lax mode recovering from the same input
#[test]
fn test_convert_withLaxModeAndBadTiming_shouldKeepValidCues() -> Result<()> {
    let text = "WEBVTT\n\n00:01.000 --> 00:02.000\nok\n\nbroken\nnope\n\n00:03.000 --> 00:04.000\nalso ok\n";
    let linked = convert(text, ParseMode::Lax, &common::options("http://x/", "v.mp4", false))?;

    assert_eq!(linked.cues.len(), 2);
    assert_eq!(linked.cues[0].id, "_:cue1");
    assert_eq!(linked.cues[1].id, "_:cue2");
    Ok(())
}

/// Test assembly errors are fatal in lax mode too
#[test]
fn test_convert_withDuplicateBase_shouldFailRegardlessOfMode() {
    let text = "WEBVTT\n@base: http://a/\n@base: http://b/\n\n00:01.000 --> 00:02.000\nx\n";
    let err = convert(text, ParseMode::Lax, &common::options("http://x/", "v.mp4", false)).unwrap_err();
    assert!(matches!(
        err,
        AppError::Link(LinkError::DuplicateReservedMetadata(ref key)) if key == "@base"
    ));
}

/// Test cue order is preserved end to end
#[test]
fn test_convert_withManyCues_shouldPreserveInputOrder() -> Result<()> {
    let mut text = String::from("WEBVTT\n\n");
    for i in (0..20).rev() {
        text.push_str(&format!("{}.000 --> {}.500\ncue {}\n\n", i, i, i));
    }
    let linked = convert(&text, ParseMode::Strict, &common::options("http://x/", "v.mp4", true))?;

    assert_eq!(linked.cues.len(), 20);
    for (index, cue) in linked.cues.iter().enumerate() {
        assert_eq!(cue.id, format!("_:cue{}", index + 1));
        let node = serde_json::to_value(&cue.fragment)?;
        assert_eq!(node["annotation"], format!("cue {}", 19 - index));
    }
    Ok(())
}
