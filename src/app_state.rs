//! Implements a struct that holds the state of the web server.

use std::sync::Arc;

use crate::{
    backend::HttpBackend,
    endpoints::backend,
    services::{AccountService, LedgerService},
};

/// The state of the web server.
///
/// Nothing here belongs to a user. Per-user credentials travel with each
/// request, see [crate::services::Session].
#[derive(Clone)]
pub struct AppState {
    /// The source of income, expense and summary data.
    pub ledger_service: Arc<dyn LedgerService>,

    /// Where new accounts are created.
    pub account_service: Arc<dyn AccountService>,

    /// The absolute URL the log-in form posts to.
    pub backend_log_in_url: String,
}

impl AppState {
    /// Create a new [AppState] where both services are served by `backend`.
    pub fn new(backend: HttpBackend) -> Self {
        let backend_log_in_url = backend
            .config()
            .endpoint(backend::LOG_IN)
            .map(String::from)
            .unwrap_or_else(|_| backend::LOG_IN.to_owned());
        let backend = Arc::new(backend);

        Self::with_services(backend.clone(), backend, backend_log_in_url)
    }

    /// Create a new [AppState] from individual services.
    pub fn with_services(
        ledger_service: Arc<dyn LedgerService>,
        account_service: Arc<dyn AccountService>,
        backend_log_in_url: String,
    ) -> Self {
        Self {
            ledger_service,
            account_service,
            backend_log_in_url,
        }
    }
}
