/*!
 * Common test utilities for the linkedvtt test suite
 */

use std::fs;
use std::path::{Path, PathBuf};
use anyhow::Result;
use tempfile::TempDir;

use linkedvtt::linked::LinkOptions;

/// Minimal document with a single unnamed cue
pub const HELLO_VTT: &str = "WEBVTT

00:00:01.000 --> 00:00:02.000
Hello
";

/// Document exercising metadata, notes, identifiers, settings and JSON payloads
pub const RICH_VTT: &str = r#"WEBVTT linked captions
Kind: captions
Language: en
Language: fr
@base: http://example.org/videos/
@video: movie.mp4
@context: ctx/people.jsonld

NOTE this file describes
who appears when

intro
00:00:00.000 --> 00:00:03.500 align:start tag:a tag:b
Welcome

00:00:04.000 --> 00:00:06.000
{"@type": "Person", "name": "Alice"}

01:00:00.000 --> 01:00:05.250 @property:depicts
"Bob"

outro
01:00:06.000 --> 01:00:07.000
{"@id": "http://example.org/people/carol"}
"#;

/// Enable test logging once; repeated calls are harmless
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Linking options with an explicit base and video
pub fn options(base: &str, video: &str, flatten: bool) -> LinkOptions {
    LinkOptions {
        base: Some(base.to_string()),
        video: Some(video.to_string()),
        contexts: Vec::new(),
        flatten,
    }
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}
