//! Processor dispatch.
//!
//! Maps an artifact's config media type to a registered processor. Artifact
//! families without a registration fall back to the default processor, so a
//! lookup never fails.

use std::collections::HashMap;

use tracing::debug;

use crate::{
    error::{ProcessorError, Result},
    traits::Processor,
};

/// Registry of processors keyed by config media type.
pub struct ProcessorRegistry {
    processors: HashMap<String, Box<dyn Processor>>,
    fallback: Box<dyn Processor>,
}

impl ProcessorRegistry {
    /// Creates a registry with the given fallback processor.
    pub fn new(fallback: Box<dyn Processor>) -> Self {
        Self {
            processors: HashMap::new(),
            fallback,
        }
    }

    /// Registers a processor for a config media type.
    ///
    /// Registration happens once, at startup; a second registration for
    /// the same media type is a wiring bug and fails.
    pub fn register(
        &mut self,
        media_type: impl Into<String>,
        processor: Box<dyn Processor>,
    ) -> Result<()> {
        let media_type = media_type.into();
        if self.processors.contains_key(&media_type) {
            return Err(ProcessorError::AlreadyRegistered {
                media_type,
            });
        }
        debug!("Registered processor for {media_type}");
        self.processors.insert(media_type, processor);
        Ok(())
    }

    /// Returns the processor for the given config media type, or the
    /// fallback when none is registered.
    pub fn get(&self, media_type: &str) -> &dyn Processor {
        self.processors
            .get(media_type)
            .map(|p| p.as_ref())
            .unwrap_or(self.fallback.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use berth_artifact::Artifact;
    use berth_registry::MemoryBlobStore;

    use super::*;
    use crate::default::{DefaultProcessor, SchemaStrategy};

    fn registry() -> ProcessorRegistry {
        ProcessorRegistry::new(Box::new(DefaultProcessor::new(MemoryBlobStore::new())))
    }

    #[test]
    fn unregistered_media_type_falls_back_to_default() {
        let registry = registry();
        let artifact =
            Artifact::new("library/x").with_media_type("application/vnd.oci.image.config.v1+json");
        assert_eq!(registry.get("anything").artifact_type(&artifact), "IMAGE");
    }

    #[test]
    fn registered_processor_wins() {
        let mut registry = registry();
        registry
            .register(
                "application/vnd.example.model.config.v1+json",
                Box::new(DefaultProcessor::with_strategy(
                    MemoryBlobStore::new(),
                    SchemaStrategy::AnnotationV1Alpha,
                )),
            )
            .unwrap();

        let artifact = Artifact::new("library/x");
        let processor = registry.get("application/vnd.example.model.config.v1+json");
        // The annotation dialect never supports additions.
        assert!(processor
            .abstract_addition(&artifact, "readme")
            .unwrap_err()
            .is_client_error());
    }

    #[test]
    fn duplicate_registration_fails() {
        let mut registry = registry();
        let media_type = "application/vnd.example.model.config.v1+json";
        registry
            .register(
                media_type,
                Box::new(DefaultProcessor::new(MemoryBlobStore::new())),
            )
            .unwrap();

        let err = registry
            .register(
                media_type,
                Box::new(DefaultProcessor::new(MemoryBlobStore::new())),
            )
            .unwrap_err();
        assert!(matches!(err, ProcessorError::AlreadyRegistered { .. }));
    }
}
