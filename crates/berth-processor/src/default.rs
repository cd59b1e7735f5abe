//! The default processor.
//!
//! Used for every artifact family without a specialized processor. It
//! derives the artifact type from the config media type and interprets the
//! artifact's self-description according to the configured
//! [`SchemaStrategy`].

use std::io::Read;

use berth_artifact::{classify, Artifact, AttributeMap, Manifest};
use berth_registry::{BlobStore, RegistryError};
use berth_schema::{v1, v1alpha};
use tracing::{debug, warn};

use crate::{
    error::{ProcessorError, Result},
    traits::{Addition, Processor},
};

/// Which self-description dialect a processor interprets.
///
/// The two dialects are mutually exclusive; the registration layer picks
/// one per artifact family. There is no runtime sniffing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaStrategy {
    /// v1 schema embedded in the configuration blob under
    /// [`v1::RESERVED_ATTRIBUTES_KEY`]. Declares additions.
    EmbeddedV1,
    /// v1alpha schema carried as annotations on the manifest's config
    /// descriptor. Declares no additions.
    AnnotationV1Alpha,
}

/// Fallback processor for artifacts with no specialized processor.
pub struct DefaultProcessor<S> {
    store: S,
    strategy: SchemaStrategy,
}

impl<S: BlobStore> DefaultProcessor<S> {
    /// Creates a processor interpreting the embedded v1 dialect.
    pub fn new(store: S) -> Self {
        Self::with_strategy(store, SchemaStrategy::EmbeddedV1)
    }

    /// Creates a processor interpreting the given dialect.
    pub fn with_strategy(store: S, strategy: SchemaStrategy) -> Self {
        Self {
            store,
            strategy,
        }
    }

    pub fn strategy(&self) -> SchemaStrategy {
        self.strategy
    }

    fn fetch_config(&self, repository: &str, digest: &str) -> Result<AttributeMap> {
        let (_, blob) = self.store.pull_blob(repository, digest)?;
        // from_reader consumes the reader, so it is released on both the
        // success and the decode-failure path.
        serde_json::from_reader(blob).map_err(ProcessorError::MalformedConfig)
    }

    fn addition_not_supported(&self, addition: &str, artifact: &Artifact) -> ProcessorError {
        ProcessorError::AdditionNotSupported {
            addition: addition.to_string(),
            artifact_type: artifact.artifact_type.clone(),
        }
    }
}

impl<S: BlobStore + Send + Sync> Processor for DefaultProcessor<S> {
    fn artifact_type(&self, artifact: &Artifact) -> String {
        classify(&artifact.media_type)
    }

    fn abstract_metadata(&self, artifact: &mut Artifact, manifest: &[u8]) -> Result<()> {
        // Artifacts pushed with an unsupported envelope are skipped, not
        // failed.
        if !Manifest::supports_envelope(&artifact.manifest_media_type) {
            return Ok(());
        }

        let manifest = Manifest::from_slice(manifest).map_err(|err| {
            warn!("Failed to parse manifest: {err}");
            ProcessorError::MalformedManifest(err)
        })?;

        debug!(
            "Abstracting metadata for {} from config {}",
            artifact.repository_name, manifest.config.digest
        );
        let mut metadata =
            self.fetch_config(&artifact.repository_name, &manifest.config.digest)?;

        // Commit the full decoded map before validating the
        // self-description. A version-mismatch failure therefore leaves the
        // unredacted map on the artifact; callers must not treat the map as
        // authoritative after an error.
        artifact.extra_attrs = Some(metadata.clone());

        match self.strategy {
            SchemaStrategy::EmbeddedV1 => {
                let Some(value) = metadata.get(v1::RESERVED_ATTRIBUTES_KEY) else {
                    return Ok(());
                };
                let schema: v1::Schema = serde_json::from_value(value.clone())
                    .map_err(ProcessorError::UnsupportedSchema)?;

                if schema.schema_version != v1::SCHEMA_VERSION_V1 {
                    return Err(ProcessorError::UnsupportedSchemaVersion {
                        version: schema.schema_version.to_string(),
                    });
                }

                for key in &schema.skip_key_list {
                    metadata.remove(key);
                }
                artifact.extra_attrs = Some(metadata);
            }
            SchemaStrategy::AnnotationV1Alpha => {
                let Some(version) =
                    manifest.config.annotation(v1alpha::ANNOTATION_SCHEMA_VERSION)
                else {
                    return Ok(());
                };
                if version != v1alpha::SCHEMA_VERSION_V1ALPHA {
                    return Err(ProcessorError::UnsupportedSchemaVersion {
                        version: version.to_string(),
                    });
                }

                let Some(skip_list) =
                    manifest.config.annotation(v1alpha::ANNOTATION_SKIP_LIST)
                else {
                    return Ok(());
                };
                for key in v1alpha::parse_skip_list(skip_list) {
                    metadata.remove(&key);
                }
                artifact.extra_attrs = Some(metadata);
            }
        }

        Ok(())
    }

    fn list_addition_types(&self, artifact: &Artifact) -> Vec<String> {
        if self.strategy != SchemaStrategy::EmbeddedV1 {
            return Vec::new();
        }
        let Some(value) = artifact
            .extra_attrs
            .as_ref()
            .and_then(|attrs| attrs.get(v1::RESERVED_ATTRIBUTES_KEY))
        else {
            return Vec::new();
        };
        match serde_json::from_value::<v1::Schema>(value.clone()) {
            Ok(schema) => schema.addition_names(),
            Err(err) => {
                // Advisory call: a broken self-description is logged and
                // downgraded to an empty result.
                warn!("Unsupported artifact config schema: {err}");
                Vec::new()
            }
        }
    }

    fn abstract_addition(&self, artifact: &Artifact, addition: &str) -> Result<Addition> {
        if self.strategy != SchemaStrategy::EmbeddedV1 {
            return Err(self.addition_not_supported(addition, artifact));
        }

        let value = artifact
            .extra_attrs
            .as_ref()
            .and_then(|attrs| attrs.get(v1::RESERVED_ATTRIBUTES_KEY))
            .ok_or_else(|| self.addition_not_supported(addition, artifact))?;
        let schema: v1::Schema = serde_json::from_value(value.clone())
            .map_err(|_| self.addition_not_supported(addition, artifact))?;

        let declared = schema
            .addition(addition)
            .filter(|add| !add.digest.is_empty())
            .ok_or_else(|| self.addition_not_supported(addition, artifact))?;

        let (_, mut blob) = self
            .store
            .pull_blob(&artifact.repository_name, &declared.digest)?;
        let mut content = Vec::new();
        blob.read_to_end(&mut content)
            .map_err(|err| ProcessorError::BlobFetch(RegistryError::Io(err)))?;

        Ok(Addition {
            content,
            content_type: declared.content_type.clone(),
        })
    }
}
