//! The HTTP client for the ledger backend.

use async_trait::async_trait;
use reqwest::{RequestBuilder, StatusCode, header::COOKIE};

use crate::{
    config::BackendConfig,
    endpoints::backend,
    error::{LedgerError, SignUpError},
    services::{AccountService, LedgerService, Session, SignUpRequest},
};

/// Talks to the ledger backend over HTTP.
///
/// The browser's cookies are attached to every request so the backend sees
/// the same session as the user.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    config: BackendConfig,
}

impl HttpBackend {
    /// Create a client for the backend described by `config`.
    pub fn new(config: BackendConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Where the backend lives.
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    fn with_session(request: RequestBuilder, session: &Session) -> RequestBuilder {
        match session.cookie() {
            Some(cookie) => request.header(COOKIE, cookie.clone()),
            None => request,
        }
    }
}

#[async_trait]
impl LedgerService for HttpBackend {
    async fn get(&self, path: &str, session: &Session) -> Result<serde_json::Value, LedgerError> {
        let url = self
            .config
            .endpoint(path)
            .map_err(|error| LedgerError::InvalidUrl(format!("{path}: {error}")))?;

        tracing::debug!("GET {url}");

        let response = Self::with_session(self.client.get(url), session)
            .send()
            .await
            .map_err(|error| LedgerError::Transport(error.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LedgerError::Status(status.as_u16()));
        }

        response
            .json()
            .await
            .map_err(|error| LedgerError::Parse(error.to_string()))
    }
}

#[async_trait]
impl AccountService for HttpBackend {
    async fn sign_up(
        &self,
        request: &SignUpRequest,
        session: &Session,
    ) -> Result<(), SignUpError> {
        let url = self
            .config
            .endpoint(backend::SIGN_UP)
            .map_err(|error| SignUpError::Transport(error.to_string()))?;

        tracing::debug!("POST {url}");

        let response = Self::with_session(self.client.post(url).json(request), session)
            .send()
            .await
            .map_err(|error| SignUpError::Transport(error.to_string()))?;

        match response.status() {
            StatusCode::OK => Ok(()),
            status => Err(SignUpError::Rejected(status.as_u16())),
        }
    }
}
