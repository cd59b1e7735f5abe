//! The artifact record populated by the processing layer.

use serde::{Deserialize, Serialize};

/// Flat attribute map extracted from an artifact's configuration blob.
///
/// Key order is preserved as decoded (serde_json is built with the
/// `indexmap` feature), so repeated extractions of the same blob produce
/// identical serialized output.
pub type AttributeMap = serde_json::Map<String, serde_json::Value>;

/// A registry-stored unit (image, chart, model, ...) identified by a
/// manifest and classified by the processing layer.
///
/// The record is constructed by the caller from upstream registry data;
/// `extra_attrs` starts out empty and is replaced wholesale by a successful
/// metadata abstraction. Concurrent abstraction calls against the *same*
/// artifact value require external synchronization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Artifact {
    /// The artifact's own media type, e.g.
    /// `application/vnd.oci.image.config.v1+json`.
    #[serde(default)]
    pub media_type: String,

    /// Media type of the manifest envelope the artifact was pushed with.
    #[serde(default)]
    pub manifest_media_type: String,

    /// Repository the artifact lives in, e.g. `library/model`. Addition
    /// digests only resolve within this repository.
    pub repository_name: String,

    /// Short uppercase type label produced by the classifier.
    #[serde(default)]
    pub artifact_type: String,

    /// Attributes decoded from the configuration blob, minus any keys the
    /// active schema redacted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_attrs: Option<AttributeMap>,
}

impl Artifact {
    /// Creates an artifact record for the given repository.
    pub fn new(repository_name: impl Into<String>) -> Self {
        Self {
            repository_name: repository_name.into(),
            ..Self::default()
        }
    }

    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = media_type.into();
        self
    }

    pub fn with_manifest_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.manifest_media_type = media_type.into();
        self
    }
}
