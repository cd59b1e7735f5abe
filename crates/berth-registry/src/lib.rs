//! Blob store boundary for the berth metadata pipeline.
//!
//! The processing layer needs exactly one network-facing operation: pull a
//! blob by digest from a repository. That operation is the [`BlobStore`]
//! trait; everything behind it is opaque to the pipeline.
//!
//! Two implementations ship with this crate:
//!
//! - [`DistributionClient`]: pulls blobs over the OCI distribution API
//!   (`GET {api}/{repository}/blobs/{digest}`).
//! - [`MemoryBlobStore`]: an in-memory map, used by tests and embedders
//!   that already hold the blob bytes.
//!
//! Retry, backoff, timeout, and cancellation policy belong to the caller;
//! this crate performs a single request per call.

pub mod client;
pub mod error;
pub mod memory;
pub mod traits;

pub use client::DistributionClient;
pub use error::{RegistryError, Result};
pub use memory::MemoryBlobStore;
pub use traits::BlobStore;
