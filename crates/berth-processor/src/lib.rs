//! Artifact metadata extraction for the berth pipeline.
//!
//! Given an [`Artifact`](berth_artifact::Artifact) and its raw manifest
//! bytes, the default processor classifies the artifact, decodes its
//! configuration blob into a flat attribute map, honors the artifact's
//! self-description (version check plus key redaction), and resolves named
//! addition payloads to their bytes.
//!
//! Two self-description dialects exist and are selected explicitly via
//! [`SchemaStrategy`]: the embedded v1 schema and the annotation-driven
//! v1alpha schema. A [`ProcessorRegistry`] dispatches config media types to
//! registered processors, falling back to the default processor.
//!
//! # Example
//!
//! ```
//! use berth_artifact::Artifact;
//! use berth_processor::{DefaultProcessor, Processor};
//! use berth_registry::MemoryBlobStore;
//!
//! let mut store = MemoryBlobStore::new();
//! store.insert(
//!     "library/model",
//!     "sha256:be948daf0e22f264ea70b713ea0db35050ae659c185706aa2fad74834455fe8c",
//!     br#"{"framework": "TensorFlow"}"#.to_vec(),
//! );
//! let processor = DefaultProcessor::new(store);
//!
//! let mut artifact = Artifact::new("library/model")
//!     .with_manifest_media_type("application/vnd.oci.image.manifest.v1+json");
//! let manifest = br#"{
//!     "schemaVersion": 2,
//!     "config": {
//!         "mediaType": "application/vnd.example.model.config.v1+json",
//!         "digest": "sha256:be948daf0e22f264ea70b713ea0db35050ae659c185706aa2fad74834455fe8c",
//!         "size": 27
//!     },
//!     "layers": []
//! }"#;
//! processor.abstract_metadata(&mut artifact, manifest).unwrap();
//! assert_eq!(
//!     artifact.extra_attrs.unwrap()["framework"],
//!     serde_json::json!("TensorFlow")
//! );
//! ```

pub mod default;
pub mod dispatch;
pub mod error;
pub mod traits;

pub use default::{DefaultProcessor, SchemaStrategy};
pub use dispatch::ProcessorRegistry;
pub use error::{ProcessorError, Result};
pub use traits::{Addition, Processor};
