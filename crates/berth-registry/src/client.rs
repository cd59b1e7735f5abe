//! OCI distribution API blob client.

use std::{
    io::Read,
    sync::LazyLock,
};

use tracing::debug;
use ureq::{
    http::header::{AUTHORIZATION, CONTENT_LENGTH},
    Agent,
};
use url::Url;

use crate::{
    error::{RegistryError, Result},
    traits::BlobStore,
};

static SHARED_AGENT: LazyLock<Agent> = LazyLock::new(|| {
    Agent::config_builder()
        .user_agent(concat!("berth/", env!("CARGO_PKG_VERSION")))
        .build()
        .into()
});

/// Blob store backed by the OCI distribution API.
///
/// Issues `GET {api}/{repository}/blobs/{digest}` over a shared agent.
/// One request per call; retry policy belongs to the caller.
///
/// # Example
///
/// ```no_run
/// use berth_registry::{BlobStore, DistributionClient};
///
/// let client = DistributionClient::new("https://ghcr.io/v2");
/// let (size, reader) = client.pull_blob("library/model", "sha256:abc...")?;
/// # Ok::<(), berth_registry::RegistryError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DistributionClient {
    api: String,
    token: Option<String>,
}

impl DistributionClient {
    /// Creates a client for the given API root, e.g. `https://ghcr.io/v2`.
    pub fn new(api: impl Into<String>) -> Self {
        Self {
            api: api.into(),
            token: None,
        }
    }

    /// Sets a bearer token sent with every request.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn blob_url(&self, repository: &str, digest: &str) -> Result<String> {
        let url = format!(
            "{}/{}/blobs/{}",
            self.api.trim_end_matches('/'),
            repository,
            digest
        );
        Url::parse(&url).map_err(|source| {
            RegistryError::InvalidUrl {
                url: url.clone(),
                source,
            }
        })?;
        Ok(url)
    }
}

impl BlobStore for DistributionClient {
    fn pull_blob(
        &self,
        repository: &str,
        digest: &str,
    ) -> Result<(u64, Box<dyn Read + Send>)> {
        match digest.split_once(':') {
            Some((algorithm, hex)) if !algorithm.is_empty() && !hex.is_empty() => {}
            _ => return Err(RegistryError::InvalidDigest(digest.to_string())),
        }

        let url = self.blob_url(repository, digest)?;
        debug!("Pulling blob from {}", url);

        let mut req = SHARED_AGENT.get(&url);
        if let Some(ref token) = self.token {
            req = req.header(AUTHORIZATION, &format!("Bearer {token}"));
        }

        let resp = req.call()?;

        if resp.status().as_u16() == 404 {
            return Err(RegistryError::BlobNotFound {
                repository: repository.to_string(),
                digest: digest.to_string(),
            });
        }
        if !resp.status().is_success() {
            return Err(RegistryError::HttpError {
                status: resp.status().as_u16(),
                url,
            });
        }

        let size = resp
            .headers()
            .get(CONTENT_LENGTH)
            .and_then(|h| h.to_str().ok())
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);

        Ok((size, Box::new(resp.into_body().into_reader())))
    }
}
