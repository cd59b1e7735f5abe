//! Media-type classification.
//!
//! Vendor-specific config media types follow the shape
//! `application/vnd.<vendor>.<subtype>.config.<version>+json`; the subtype
//! segment is the artifact's logical type.

use std::sync::LazyLock;

use regex::Regex;

/// Type label for artifacts whose media type does not match the
/// vendor-config shape.
pub const ARTIFACT_TYPE_UNKNOWN: &str = "UNKNOWN";

static ARTIFACT_TYPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^application/vnd\.[^.]*\.(.*)\.config\.[^.]*\+json$").unwrap()
});

/// Extracts the artifact type from a config media type.
///
/// Returns the upper-cased `<subtype>` segment of media types shaped like
/// `application/vnd.<vendor>.<subtype>.config.<version>+json`, or
/// [`ARTIFACT_TYPE_UNKNOWN`] for anything else (including the empty
/// string). Pure and total.
pub fn classify(media_type: &str) -> String {
    match ARTIFACT_TYPE_RE.captures(media_type) {
        Some(captures) => captures[1].to_uppercase(),
        None => ARTIFACT_TYPE_UNKNOWN.to_string(),
    }
}
