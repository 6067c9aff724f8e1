//! The remote collaborators of the web app: the ledger backend for reading
//! data and the account service for creating users.
//!
//! Both are traits so that route handlers can be exercised against in-memory
//! doubles. [crate::backend::HttpBackend] implements both over HTTP.

use std::{convert::Infallible, fmt::Debug};

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, HeaderValue, header::COOKIE, request::Parts},
};
use serde::Serialize;

use crate::error::{LedgerError, SignUpError};

/// The credentials of the browser that made the current request.
///
/// The cookie header is forwarded as-is to the backend and dropped with the
/// request; nothing is kept between requests.
#[derive(Debug, Clone, Default)]
pub struct Session {
    cookie: Option<HeaderValue>,
}

impl Session {
    /// Capture the cookie header from `headers`, if there is one.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            cookie: headers.get(COOKIE).cloned(),
        }
    }

    /// The raw cookie header to attach to backend requests.
    pub fn cookie(&self) -> Option<&HeaderValue> {
        self.cookie.as_ref()
    }
}

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}

/// Read access to the ledger backend.
#[async_trait]
pub trait LedgerService: Send + Sync {
    /// Issue one GET request for `path` and return the decoded JSON body.
    async fn get(&self, path: &str, session: &Session) -> Result<serde_json::Value, LedgerError>;
}

/// The body of a sign-up request.
///
/// The password confirmation is never sent.
#[derive(Clone, PartialEq, Serialize)]
pub struct SignUpRequest {
    pub email: String,
    pub name: String,
    pub password: String,
}

impl Debug for SignUpRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignUpRequest")
            .field("email", &self.email)
            .field("name", &self.name)
            .field("password", &"********")
            .finish()
    }
}

/// Creates user accounts.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Submit `request`. Only a 200 response counts as success.
    async fn sign_up(&self, request: &SignUpRequest, session: &Session)
    -> Result<(), SignUpError>;
}
