use anyhow::{anyhow, Context, Result};
use log::{debug, LevelFilter};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::linked::LinkOptions;
use crate::webvtt::ParseMode;

/// Application configuration module
/// This module handles loading and validating converter settings.
/// Command-line flags override values read from the configuration file.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Video IRI used when the input declares no `@video`
    #[serde(default = "default_video")]
    pub default_video: String,

    /// Embed fragment nodes inline
    #[serde(default)]
    pub flatten: bool,

    /// Abort on the first parse issue
    #[serde(default)]
    pub strict: bool,

    /// Extra JSON-LD context IRIs
    #[serde(default)]
    pub contexts: Vec<String>,

    /// What to print
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Pretty-print the JSON output
    #[serde(default = "default_true")]
    pub pretty: bool,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Output notation
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    // @format: JSON-LD linked document
    #[default]
    JsonLd,
    // @format: Parsed WebVTT structure as JSON
    Document,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::JsonLd => write!(f, "json-ld"),
            Self::Document => write!(f, "document"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json-ld" | "jsonld" => Ok(Self::JsonLd),
            "document" => Ok(Self::Document),
            _ => Err(anyhow!("Invalid output format: {}", s)),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<&LogLevel> for LevelFilter {
    fn from(level: &LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn default_video() -> String {
    "http://example.org/video.mp4".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load a configuration file, falling back to defaults when it does not exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("Config file not found at '{}', using defaults", path.display());
            return Ok(Config::default());
        }

        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.default_video.trim().is_empty() {
            return Err(anyhow!("Default video IRI must not be empty"));
        }
        if let Some(index) = self.contexts.iter().position(|c| c.trim().is_empty()) {
            return Err(anyhow!("Context entry {} must not be empty", index + 1));
        }
        Ok(())
    }

    /// Parse mode selected by the `strict` flag
    pub fn parse_mode(&self) -> ParseMode {
        ParseMode::from_strict(self.strict)
    }

    /// Linking parameters for an input whose base IRI is `base`
    pub fn link_options(&self, base: Option<String>) -> LinkOptions {
        LinkOptions {
            base,
            video: Some(self.default_video.clone()),
            contexts: self.contexts.clone(),
            flatten: self.flatten,
        }
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            default_video: default_video(),
            flatten: false,
            strict: false,
            contexts: Vec::new(),
            output_format: OutputFormat::default(),
            pretty: default_true(),
            log_level: LogLevel::default(),
        }
    }
}
