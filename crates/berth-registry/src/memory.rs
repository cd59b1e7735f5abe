//! In-memory blob store.

use std::{
    collections::HashMap,
    io::{Cursor, Read},
};

use crate::{
    error::{RegistryError, Result},
    traits::BlobStore,
};

/// Blob store backed by a plain map.
///
/// Useful for tests and for embedders that already hold blob content.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    blobs: HashMap<(String, String), Vec<u8>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores blob content under `(repository, digest)`.
    pub fn insert(
        &mut self,
        repository: impl Into<String>,
        digest: impl Into<String>,
        content: Vec<u8>,
    ) {
        self.blobs.insert((repository.into(), digest.into()), content);
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }
}

impl BlobStore for MemoryBlobStore {
    fn pull_blob(
        &self,
        repository: &str,
        digest: &str,
    ) -> Result<(u64, Box<dyn Read + Send>)> {
        let content = self
            .blobs
            .get(&(repository.to_string(), digest.to_string()))
            .ok_or_else(|| {
                RegistryError::BlobNotFound {
                    repository: repository.to_string(),
                    digest: digest.to_string(),
                }
            })?;
        Ok((
            content.len() as u64,
            Box::new(Cursor::new(content.clone())),
        ))
    }
}
