//! Error types for the processor crate.

use berth_registry::RegistryError;
use miette::Diagnostic;
use thiserror::Error;

/// Errors that can occur while abstracting artifact metadata or additions.
///
/// Nothing here is retried internally. [`BlobFetch`](Self::BlobFetch) is
/// the transient/server-side class eligible for caller-level retry; the
/// variants flagged by [`is_client_error`](Self::is_client_error) describe
/// a bad request or a malformed artifact self-description and should be
/// surfaced to the caller as such.
#[derive(Error, Diagnostic, Debug)]
pub enum ProcessorError {
    #[error("Malformed manifest: {0}")]
    #[diagnostic(code(berth_processor::malformed_manifest))]
    MalformedManifest(#[source] serde_json::Error),

    #[error(transparent)]
    #[diagnostic(
        code(berth_processor::blob_fetch),
        help("Transient registry failure; the call may be retried")
    )]
    BlobFetch(#[from] RegistryError),

    #[error("Malformed config blob: {0}")]
    #[diagnostic(code(berth_processor::malformed_config))]
    MalformedConfig(#[source] serde_json::Error),

    #[error("Unsupported artifact config schema: {0}")]
    #[diagnostic(code(berth_processor::unsupported_schema))]
    UnsupportedSchema(#[source] serde_json::Error),

    #[error("Unsupported artifact config schema version {version}")]
    #[diagnostic(code(berth_processor::unsupported_schema_version))]
    UnsupportedSchemaVersion { version: String },

    #[error("Addition {addition} isn't supported for {artifact_type}")]
    #[diagnostic(
        code(berth_processor::addition_not_supported),
        help("The artifact's self-description does not declare this addition")
    )]
    AdditionNotSupported {
        addition: String,
        artifact_type: String,
    },

    #[error("A processor for media type {media_type} is already registered")]
    #[diagnostic(code(berth_processor::already_registered))]
    AlreadyRegistered { media_type: String },
}

impl ProcessorError {
    /// Whether the error describes a bad request or a malformed artifact
    /// self-description rather than an infrastructure failure.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedSchemaVersion { .. } | Self::AdditionNotSupported { .. }
        )
    }
}

/// A specialized Result type for processor operations.
pub type Result<T> = std::result::Result<T, ProcessorError>;
