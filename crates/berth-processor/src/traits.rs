//! The processor seam.

use berth_artifact::Artifact;

use crate::error::Result;

/// A named side payload resolved from an artifact's self-description.
///
/// Constructed per request and not cached; content is opaque bytes plus a
/// content-type label.
#[derive(Debug, Clone)]
pub struct Addition {
    pub content: Vec<u8>,
    pub content_type: String,
}

/// Processes one family of artifacts: classification, metadata
/// abstraction, and addition resolution.
///
/// Implementations are stateless per call — each method is a single-pass
/// transformation keyed only by its arguments — and hold their blob store
/// handle by explicit injection at construction time.
pub trait Processor: Send + Sync {
    /// Returns the short uppercase type label for the artifact.
    fn artifact_type(&self, artifact: &Artifact) -> String;

    /// Decodes the artifact's configuration blob and replaces
    /// `artifact.extra_attrs` wholesale, honoring the self-description's
    /// version and skip-list when present.
    fn abstract_metadata(&self, artifact: &mut Artifact, manifest: &[u8]) -> Result<()>;

    /// Names of the additions the artifact declares, in declaration order.
    /// Best effort: decode failures yield an empty list, not an error.
    fn list_addition_types(&self, artifact: &Artifact) -> Vec<String>;

    /// Resolves a declared addition to its content and content type.
    fn abstract_addition(&self, artifact: &Artifact, addition: &str) -> Result<Addition>;
}
