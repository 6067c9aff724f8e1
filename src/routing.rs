//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState, endpoints,
    internal_server_error::get_internal_server_error_page,
    ledger::{get_charts_page, get_list_page},
    log_in::get_log_in_page,
    not_found::get_404_not_found,
    sign_up::{get_sign_up_page, submit_sign_up_form, validate_sign_up_form},
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::LIST_VIEW, get(get_list_page))
        .route(endpoints::CHARTS_VIEW, get(get_charts_page))
        .route(endpoints::SIGN_UP_VIEW, get(get_sign_up_page))
        .route(endpoints::SIGN_UP_API, post(submit_sign_up_form))
        .route(endpoints::SIGN_UP_VALIDATE_API, post(validate_sign_up_form))
        .route(endpoints::LOG_IN_VIEW, get(get_log_in_page))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the ledger list.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::LIST_VIEW)
}
