//! Income, expense and summary data from the ledger backend and the pages
//! that display it.

use std::sync::Arc;

use axum::extract::FromRef;

use crate::{AppState, services::LedgerService};

pub mod adapters;
mod charts;
mod list_page;
pub mod records;

pub use charts::get_charts_page;
pub use list_page::get_list_page;

/// The state needed to read from the ledger.
#[derive(Clone)]
pub struct LedgerState {
    pub ledger_service: Arc<dyn LedgerService>,
}

impl FromRef<AppState> for LedgerState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger_service: state.ledger_service.clone(),
        }
    }
}
