//! The blob store seam.

use std::{io::Read, sync::Arc};

use crate::error::Result;

/// Resolves `(repository, digest)` to a byte stream.
///
/// This is the sole network-facing dependency of the metadata pipeline.
/// Implementations perform a single fetch per call; the returned reader is
/// owned by the caller and released when dropped, so every exit path of a
/// consuming call frees it exactly once.
pub trait BlobStore {
    /// Pulls the blob at `digest` from `repository`.
    ///
    /// Returns the blob size as reported by the store (0 when unknown) and
    /// a reader over the blob content.
    fn pull_blob(&self, repository: &str, digest: &str)
        -> Result<(u64, Box<dyn Read + Send>)>;
}

impl<S: BlobStore + ?Sized> BlobStore for &S {
    fn pull_blob(
        &self,
        repository: &str,
        digest: &str,
    ) -> Result<(u64, Box<dyn Read + Send>)> {
        (**self).pull_blob(repository, digest)
    }
}

impl<S: BlobStore + ?Sized> BlobStore for Arc<S> {
    fn pull_blob(
        &self,
        repository: &str,
        digest: &str,
    ) -> Result<(u64, Box<dyn Read + Send>)> {
        (**self).pull_blob(repository, digest)
    }
}
