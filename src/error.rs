//! Defines the app level error type, the errors of the remote services and
//! conversions to rendered HTML pages.
use axum::response::{IntoResponse, Response};

use crate::internal_server_error::InternalServerError;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// Data from the ledger backend could not be fetched or decoded.
    #[error("could not load ledger data: {0}")]
    Ledger(#[from] LedgerError),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::Ledger(error) => {
                tracing::error!("Rendering error page for ledger failure: {error}");

                InternalServerError {
                    description: "Could not load your ledger",
                    fix: "The ledger service did not respond as expected. Try again later.",
                }
                .into_response()
            }
        }
    }
}

/// A failure while fetching data from the ledger backend.
///
/// These are never handled where they occur; adapters log them and pass them
/// on to the page that requested the data.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum LedgerError {
    /// The backend path could not be joined onto the base URL.
    #[error("invalid backend URL for {0}")]
    InvalidUrl(String),

    /// The request could not be sent or the response could not be read.
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-success status code.
    #[error("backend responded with status {0}")]
    Status(u16),

    /// The response body did not have the expected shape.
    #[error("could not parse response: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for LedgerError {
    fn from(value: serde_json::Error) -> Self {
        LedgerError::Parse(value.to_string())
    }
}

/// The cause of a failed sign-up.
///
/// The user is shown the same message for every cause. The cause is kept so
/// that it can be logged and asserted on.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum SignUpError {
    /// The request never got a response.
    #[error("sign-up request failed: {0}")]
    Transport(String),

    /// The account service answered with something other than 200 OK.
    #[error("sign-up rejected with status {0}")]
    Rejected(u16),
}
