use once_cell::sync::Lazy;
use serde_json::{json, Value};

/// Namespace of the linked WebVTT vocabulary
pub const VTT_NAMESPACE: &str = "http://champin.net/2014/linkedvtt/onto#";

/// Type tag of the produced document
pub const DATASET_TYPE: &str = "VideoMetadataDataset";

/// Property used for payloads without an `@property` setting
pub const DEFAULT_PROPERTY: &str = "annotation";

/// JSON-LD context placed first in every produced document
pub static DEFAULT_CONTEXT: Lazy<Value> = Lazy::new(|| {
    json!({
        "vtt": VTT_NAMESPACE,
        "rdf": "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
        "owl": "http://www.w3.org/2002/07/owl#",

        // WebVTT settings and metadata
        "Region": "vtt:regionMetadata",
        "vertical": "vtt:vertical",
        "line": "vtt:line",
        "size": "vtt:size",
        "position": "vtt:position",
        "align": "vtt:align",
        "region": "vtt:region",

        // linked WebVTT terms
        "VideoAnnotationDataset": "vtt:VideoAnnotationDataset",
        "VideoMetadataDataset": "vtt:VideoMetadataDataset",
        "cues": "vtt:hasCue",
        "fragment": "vtt:describesFragment",
        "annotation": "vtt:annotedBy",
    })
});
