//! Artifact data model for the berth metadata pipeline.
//!
//! This crate defines the [`Artifact`] record that the processing layer
//! populates, the [`Manifest`] wire structs for the two supported manifest
//! envelopes, and the pure media-type classifier.
//!
//! # Example
//!
//! ```
//! use berth_artifact::{classify, Artifact};
//!
//! let mut artifact = Artifact::new("library/model")
//!     .with_media_type("application/vnd.oci.image.config.v1+json");
//! artifact.artifact_type = classify(&artifact.media_type);
//! assert_eq!(artifact.artifact_type, "IMAGE");
//! ```

pub mod artifact;
pub mod classifier;
pub mod manifest;

pub use artifact::{Artifact, AttributeMap};
pub use classifier::{classify, ARTIFACT_TYPE_UNKNOWN};
pub use manifest::{
    Descriptor, Manifest, MEDIA_TYPE_DOCKER_MANIFEST, MEDIA_TYPE_IMAGE_MANIFEST,
};
