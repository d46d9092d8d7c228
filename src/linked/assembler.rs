/*!
 * Graph assembly: turns a parsed WebVTT document into a JSON-LD document
 * anchoring every cue to a time-range fragment of the video.
 *
 * Per cue, the payload decides the shape of the fragment node:
 * - a JSON object without `@id` becomes the fragment node itself, with the
 *   fragment IRI injected as its `@id`
 * - anything else is wrapped as `{"@id": <fragment>, <property>: <payload>}`
 *   where `<property>` comes from the `@property` setting, or `annotation`
 */

use log::{debug, warn};
use serde::Serialize;
use serde_json::{Map, Value};

use super::context::{DATASET_TYPE, DEFAULT_CONTEXT, DEFAULT_PROPERTY};
use super::fragment::cue_fragment_iri;
use super::iri;
use super::metadata::{is_reserved, SystemMetadata};
use crate::errors::LinkError;
use crate::webvtt::{Cue, Payload, WebVttDocument};

/// Setting naming the property that links a fragment to a non-object payload
pub const PROPERTY_SETTING: &str = "@property";

const ID: &str = "@id";

/// Caller-supplied linking parameters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkOptions {
    /// Base IRI, overridden by an `@base` metadata header
    pub base: Option<String>,
    /// Video IRI, overridden by a `@video` metadata header
    pub video: Option<String>,
    /// Extra context entries, placed after the default context
    pub contexts: Vec<String>,
    /// Embed fragment nodes inline instead of as nested graphs
    pub flatten: bool,
}

/// The assembled JSON-LD document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkedDocument {
    #[serde(rename = "@context")]
    pub context: Vec<Value>,

    #[serde(rename = "@id")]
    pub id: String,

    #[serde(rename = "@type")]
    pub kind: String,

    /// Resolved video IRI
    pub video: String,

    /// Cue nodes in input order
    pub cues: Vec<LinkedCue>,

    /// Non-reserved metadata headers, passed through
    #[serde(flatten)]
    pub properties: Map<String, Value>,
}

/// One cue node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkedCue {
    /// `#id=<cue id>` or a blank node id
    #[serde(rename = "@id")]
    pub id: String,

    /// Non-reserved settings, passed through
    #[serde(flatten)]
    pub properties: Map<String, Value>,

    pub fragment: FragmentRef,

    /// Fragment node, present unless flattened
    #[serde(rename = "@graph", skip_serializing_if = "Option::is_none")]
    pub graph: Option<Value>,
}

/// How a cue points at its fragment
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FragmentRef {
    /// The fragment IRI; the node itself sits in `@graph`
    Iri(String),
    /// The fragment node, inlined
    Node(Value),
}

impl FragmentRef {
    /// The fragment IRI, whichever form is used
    pub fn iri(&self) -> Option<&str> {
        match self {
            FragmentRef::Iri(iri) => Some(iri),
            FragmentRef::Node(node) => node.get(ID).and_then(Value::as_str),
        }
    }
}

/// Blank node ids, scoped to one assembly
struct BlankNodeIds {
    next: usize,
}

impl BlankNodeIds {
    fn new() -> Self {
        BlankNodeIds { next: 1 }
    }

    fn generate(&mut self) -> String {
        let id = format!("_:cue{}", self.next);
        self.next += 1;
        id
    }
}

/// Assemble the linked-data document for `document`
pub fn assemble(document: &WebVttDocument, options: &LinkOptions) -> Result<LinkedDocument, LinkError> {
    let sys = SystemMetadata::extract(&document.metadata)?;

    let base = non_empty(&sys.base)
        .or_else(|| non_empty(&options.base))
        .ok_or(LinkError::MissingBaseIdentifier)?
        .to_string();

    let video = non_empty(&sys.video)
        .or_else(|| non_empty(&options.video))
        .ok_or(LinkError::MissingVideoIdentifier)?;
    let video = iri::resolve(&base, video);
    debug!("linking cues with base <{}> and video <{}>", base, video);

    let mut context = vec![DEFAULT_CONTEXT.clone()];
    context.extend(options.contexts.iter().cloned().map(Value::String));
    if sys.base.is_some() {
        let mut base_entry = Map::new();
        base_entry.insert("@base".to_string(), Value::String(base.clone()));
        context.insert(0, Value::Object(base_entry));
    }
    context.extend(
        sys.contexts
            .iter()
            .map(|entry| Value::String(iri::resolve(&base, entry))),
    );

    let mut properties = Map::new();
    for (key, values) in &document.metadata {
        if is_reserved(key) {
            continue;
        }
        if matches!(key.as_str(), "video" | "cues") {
            warn!("ignoring metadata header '{}' clashing with a document key", key);
            continue;
        }
        let values = values.iter().cloned().map(Value::String).collect();
        properties.insert(key.clone(), Value::Array(values));
    }

    let mut ids = BlankNodeIds::new();
    let cues = document
        .cues
        .iter()
        .map(|cue| link_cue(cue, &video, options.flatten, &mut ids))
        .collect();

    Ok(LinkedDocument {
        context,
        id: base,
        kind: DATASET_TYPE.to_string(),
        video,
        cues,
        properties,
    })
}

fn link_cue(cue: &Cue, video: &str, flatten: bool, ids: &mut BlankNodeIds) -> LinkedCue {
    let id = match &cue.id {
        Some(id) => format!("#id={}", id),
        None => ids.generate(),
    };

    let mut properties = Map::new();
    for (key, values) in &cue.settings {
        if is_reserved(key) {
            continue;
        }
        if key == "fragment" {
            warn!("ignoring cue setting 'fragment' on cue {}", id);
            continue;
        }
        let values = values
            .iter()
            .map(|value| value.clone().map_or(Value::Null, Value::String))
            .collect();
        properties.insert(key.clone(), Value::Array(values));
    }

    let fragment_iri = cue_fragment_iri(cue, video);
    let property = cue.first_setting(PROPERTY_SETTING).unwrap_or(DEFAULT_PROPERTY);
    let node = fragment_node(cue.classify_payload(), &fragment_iri, property);

    let (fragment, graph) = if flatten {
        (FragmentRef::Node(node), None)
    } else {
        (FragmentRef::Iri(fragment_iri), Some(node))
    };

    LinkedCue {
        id,
        properties,
        fragment,
        graph,
    }
}

/// Build the node describing a fragment from the cue payload
pub fn fragment_node(payload: Payload, fragment_iri: &str, property: &str) -> Value {
    match payload {
        Payload::Structured(Value::Object(mut node)) if !node.contains_key(ID) => {
            node.insert(ID.to_string(), Value::String(fragment_iri.to_string()));
            Value::Object(node)
        }
        other => {
            let mut node = Map::new();
            node.insert(ID.to_string(), Value::String(fragment_iri.to_string()));
            node.insert(property.to_string(), other.into_value());
            Value::Object(node)
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}
