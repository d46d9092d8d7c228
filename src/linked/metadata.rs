use crate::errors::LinkError;
use crate::webvtt::RawMetadata;

// @module: Reserved metadata keys

/// Marker prefixing every reserved key
pub const RESERVED_MARKER: char = '@';

pub const BASE_KEY: &str = "@base";
pub const VIDEO_KEY: &str = "@video";
pub const CONTEXT_KEY: &str = "@context";

/// The metadata values with system-defined meaning
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemMetadata {
    /// Declared `@base`, if any
    pub base: Option<String>,
    /// Declared `@video`, possibly relative
    pub video: Option<String>,
    /// Declared `@context` entries in order, possibly relative
    pub contexts: Vec<String>,
}

impl SystemMetadata {
    /// Extract the reserved keys, rejecting repeated singletons
    pub fn extract(metadata: &RawMetadata) -> Result<Self, LinkError> {
        Ok(SystemMetadata {
            base: singleton(metadata, BASE_KEY)?,
            video: singleton(metadata, VIDEO_KEY)?,
            contexts: metadata.get(CONTEXT_KEY).cloned().unwrap_or_default(),
        })
    }
}

/// Whether `key` carries system-defined meaning
pub fn is_reserved(key: &str) -> bool {
    key.starts_with(RESERVED_MARKER)
}

fn singleton(metadata: &RawMetadata, key: &str) -> Result<Option<String>, LinkError> {
    match metadata.get(key).map(Vec::as_slice) {
        None | Some([]) => Ok(None),
        Some([value]) => Ok(Some(value.clone())),
        Some(_) => Err(LinkError::DuplicateReservedMetadata(key.to_string())),
    }
}
