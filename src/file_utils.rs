use anyhow::{anyhow, Context, Result};
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use url::Url;

// @module: Input and output plumbing for the converter

/// Base IRI used for text read from standard input
pub const STDIN_BASE: &str = "stdin:";

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: Whether a path argument designates standard streams
    pub fn is_stdio(path: Option<&Path>) -> bool {
        path.is_none_or(|p| p.as_os_str() == "-")
    }

    /// Read the whole input, from a file or from stdin
    pub fn read_input(path: Option<&Path>) -> Result<String> {
        match path {
            Some(path) if !Self::is_stdio(Some(path)) => Self::read_to_string(path),
            _ => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("Failed to read standard input")?;
                Ok(text)
            }
        }
    }

    /// Write the output, to a file or to stdout
    pub fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
        match path {
            Some(path) if !Self::is_stdio(Some(path)) => Self::write_to_file(path, content),
            _ => {
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{}", content).context("Failed to write standard output")?;
                Ok(())
            }
        }
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;
        Ok(())
    }

    /// Default base IRI for an input: `stdin:` or the `file://` URL of its absolute path
    pub fn base_iri_for(path: Option<&Path>) -> Result<String> {
        let path = match path {
            Some(path) if !Self::is_stdio(Some(path)) => path,
            _ => return Ok(STDIN_BASE.to_string()),
        };
        let absolute: PathBuf = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()
                .context("Failed to determine current directory")?
                .join(path)
        };
        Url::from_file_path(&absolute)
            .map(|url| url.to_string())
            .map_err(|_| anyhow!("Cannot build a file IRI for {:?}", absolute))
    }
}
