/*!
 * Linked-data assembly of parsed WebVTT documents.
 *
 * - `metadata`: reserved `@base`, `@video` and `@context` headers
 * - `fragment`: media-fragment IRIs for cue time ranges
 * - `iri`: relative reference resolution
 * - `context`: the default JSON-LD context
 * - `assembler`: builds the JSON-LD document
 */

pub mod assembler;
pub mod context;
pub mod fragment;
pub mod iri;
pub mod metadata;

pub use assembler::{assemble, FragmentRef, LinkOptions, LinkedCue, LinkedDocument};
pub use metadata::SystemMetadata;
