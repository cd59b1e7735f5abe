//! Annotation-driven v1alpha schema dialect.
//!
//! Instead of embedding a schema in the configuration blob, this dialect
//! carries two plain string annotations on the manifest's config
//! descriptor:
//!
//! ```json
//! "annotations": {
//!     "io.berth.artifact.schema.version": "v1alpha",
//!     "io.berth.artifact.skiplist": "metrics,dataset"
//! }
//! ```
//!
//! The dialect declares no additions.

/// Annotation key carrying the schema version literal.
pub const ANNOTATION_SCHEMA_VERSION: &str = "io.berth.artifact.schema.version";

/// The single version literal this dialect supports.
pub const SCHEMA_VERSION_V1ALPHA: &str = "v1alpha";

/// Annotation key carrying the comma-separated list of configuration keys
/// to redact.
pub const ANNOTATION_SKIP_LIST: &str = "io.berth.artifact.skiplist";

/// Splits a skip-list annotation value into key names.
///
/// Segments are trimmed of surrounding whitespace; empty segments are
/// dropped, so `"a, b,"` yields `["a", "b"]`.
pub fn parse_skip_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(String::from)
        .collect()
}
