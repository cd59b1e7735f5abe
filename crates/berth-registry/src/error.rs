//! Error types for the registry crate.

use miette::Diagnostic;
use thiserror::Error;

/// Errors that can occur while pulling blobs.
#[derive(Error, Diagnostic, Debug)]
pub enum RegistryError {
    #[error("Invalid digest: {0}")]
    #[diagnostic(
        code(berth_registry::invalid_digest),
        help("Digests must have the form <algorithm>:<hex>, e.g. sha256:abc...")
    )]
    InvalidDigest(String),

    #[error("Invalid URL: {url}")]
    #[diagnostic(code(berth_registry::invalid_url))]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error(transparent)]
    #[diagnostic(
        code(berth_registry::network),
        help("Check your network connection and the registry URL")
    )]
    Network(#[from] Box<ureq::Error>),

    #[error("HTTP {status}: {url}")]
    #[diagnostic(code(berth_registry::http_error))]
    HttpError { status: u16, url: String },

    #[error("Blob {digest} not found in repository {repository}")]
    #[diagnostic(code(berth_registry::blob_not_found))]
    BlobNotFound { repository: String, digest: String },

    #[error(transparent)]
    #[diagnostic(code(berth_registry::io))]
    Io(#[from] std::io::Error),
}

impl From<ureq::Error> for RegistryError {
    fn from(err: ureq::Error) -> Self {
        Self::Network(Box::new(err))
    }
}

/// A specialized Result type for blob store operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
