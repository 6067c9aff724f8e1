//! The log-in page users land on after signing up.
//!
//! Authentication itself belongs to the backend, so the form posts straight
//! to it.

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    AppState, endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, LINK_STYLE, base,
        log_in_register,
    },
    sign_up::controller::SubmissionOutcome,
};

/// The state needed to render the log-in page.
#[derive(Debug, Clone)]
pub struct LogInState {
    /// The absolute URL of the backend's log-in endpoint.
    pub action: String,
}

impl FromRef<AppState> for LogInState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            action: state.backend_log_in_url.clone(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LogInQuery {
    /// Set when the user was redirected here after creating an account.
    #[serde(default)]
    signed_up: bool,
}

/// Display the log-in page.
///
/// After a sign-up the success notification is shown above the form.
pub async fn get_log_in_page(
    State(state): State<LogInState>,
    Query(query): Query<LogInQuery>,
) -> Response {
    let form = log_in_form(&state.action);
    let content = html! {
        @if query.signed_up {
            div class="flex justify-center px-6 pt-8"
            {
                div class="w-full sm:max-w-md" { (SubmissionOutcome::Success.notification().into_html()) }
            }
        }

        (log_in_register("Log in to your account", &form))
    };

    base("Log In", &[], &content).into_response()
}

fn log_in_form(action: &str) -> Markup {
    html! {
        form method="post" action=(action) class="space-y-4 md:space-y-6"
        {
            div
            {
                label for="email" class=(FORM_LABEL_STYLE) { "Email" }

                input
                    type="email"
                    name="email"
                    id="email"
                    placeholder="name@company.com"
                    class=(FORM_TEXT_INPUT_STYLE)
                    autocomplete="email"
                    required
                    autofocus;
            }

            div
            {
                label for="password" class=(FORM_LABEL_STYLE) { "Password" }

                input
                    type="password"
                    name="password"
                    id="password"
                    placeholder="••••••••"
                    class=(FORM_TEXT_INPUT_STYLE)
                    autocomplete="current-password"
                    required;
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Log in" }

            p class="text-sm font-light text-gray-500 dark:text-gray-400"
            {
                "Don't have an account? "

                a href=(endpoints::SIGN_UP_VIEW) class=(LINK_STYLE) { "Sign up here" }
            }
        }
    }
}
