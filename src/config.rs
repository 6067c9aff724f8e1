//! Where the ledger backend lives.

use url::Url;

/// The origin of the ledger backend. All backend paths are relative to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    base_url: Url,
}

impl BackendConfig {
    /// The backend origin used when none is configured.
    pub const DEFAULT_BASE_URL: &str = "https://localhost:8888";

    /// Use `base_url` as the backend origin.
    pub fn new(base_url: Url) -> Self {
        Self { base_url }
    }

    /// The backend origin.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a backend `path` such as `/ledger/income/monthly` against the base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` cannot be joined onto the base URL.
    pub fn endpoint(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(path)
    }
}
