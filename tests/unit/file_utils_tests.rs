/*!
 * Tests for input and output helpers
 */

use std::path::Path;
use anyhow::Result;

use linkedvtt::file_utils::{FileManager, STDIN_BASE};
use crate::common;

#[test]
fn test_isStdio_withDashOrNone_shouldBeTrue() {
    assert!(FileManager::is_stdio(None));
    assert!(FileManager::is_stdio(Some(Path::new("-"))));
    assert!(!FileManager::is_stdio(Some(Path::new("subs.vtt"))));
}

#[test]
fn test_readInput_withFile_shouldReturnContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "hello.vtt", common::HELLO_VTT)?;
    assert_eq!(FileManager::read_input(Some(path.as_path()))?, common::HELLO_VTT);
    Ok(())
}

#[test]
fn test_readInput_withMissingFile_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    assert!(FileManager::read_input(Some(temp_dir.path().join("absent.vtt").as_path())).is_err());
    Ok(())
}

#[test]
fn test_writeOutput_withNestedPath_shouldCreateDirectories() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("out").join("doc.jsonld");
    FileManager::write_output(Some(path.as_path()), "{}")?;
    assert_eq!(FileManager::read_to_string(&path)?, "{}");
    Ok(())
}

#[test]
fn test_baseIriFor_withFile_shouldBeFileUrl() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "subs.vtt", common::HELLO_VTT)?;
    let base = FileManager::base_iri_for(Some(path.as_path()))?;
    assert!(base.starts_with("file://"));
    assert!(base.ends_with("/subs.vtt"));
    assert_eq!(FileManager::base_iri_for(None)?, STDIN_BASE);
    Ok(())
}
