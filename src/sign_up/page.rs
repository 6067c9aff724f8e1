//! The sign-up page, the endpoint that validates it as the user types and the
//! endpoint that submits it.
use std::sync::Arc;

use axum::{
    Form,
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;
use maud::{Markup, html};

use crate::{
    AppState, endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_TEXT_INPUT_STYLE, LINK_STYLE, base, loading_spinner,
        log_in_register,
    },
    services::{AccountService, Session},
    sign_up::{
        controller::{SubmissionBlocked, SubmissionController, SubmissionOutcome},
        form::{FieldState, FormState, SignUpForm},
        validation::Field,
    },
};

/// The query string appended to the log-in page after a successful sign-up.
pub const SIGNED_UP_QUERY: &str = "signed_up=true";

/// The state needed for creating a new account.
#[derive(Clone)]
pub struct SignUpState {
    pub account_service: Arc<dyn AccountService>,
}

impl FromRef<AppState> for SignUpState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            account_service: state.account_service.clone(),
        }
    }
}

/// Display the sign-up page with an empty form.
pub async fn get_sign_up_page() -> Response {
    let form = sign_up_form(&FormState::new());
    let content = log_in_register("Create Account", &form);

    base("Sign Up", &[], &content).into_response()
}

/// Validate the whole form after a keystroke.
///
/// Responds with out-of-band swaps for every feedback message and for the
/// submit button so the inputs keep their focus.
pub async fn validate_sign_up_form(Form(form): Form<SignUpForm>) -> Response {
    let form_state = FormState::from(form);

    html! {
        @for field in Field::ALL {
            (field_feedback(field, form_state.field(field), true))
        }

        (submit_button(form_state.can_submit(), true))
    }
    .into_response()
}

/// Submit the sign-up form.
///
/// On success the client is redirected to the log-in page. On failure the
/// form is returned empty together with an error alert.
pub async fn submit_sign_up_form(
    State(state): State<SignUpState>,
    session: Session,
    Form(form): Form<SignUpForm>,
) -> Response {
    let mut form_state = FormState::from(form);
    let mut controller = SubmissionController::new(state.account_service.as_ref());

    let response = match controller.submit(&mut form_state, &session).await {
        Ok(SubmissionOutcome::Success) => (
            HxRedirect(format!("{}?{SIGNED_UP_QUERY}", endpoints::LOG_IN_VIEW)),
            StatusCode::SEE_OTHER,
        )
            .into_response(),
        Ok(outcome) => html! {
            (sign_up_form(&form_state))
            (outcome.notification().into_oob_html())
        }
        .into_response(),
        Err(SubmissionBlocked) => {
            tracing::debug!("Rejected sign-up submission with invalid fields");

            sign_up_form(&form_state).into_response()
        }
    };

    controller.acknowledge();

    response
}

fn sign_up_form(form_state: &FormState) -> Markup {
    html! {
        form
            id="sign-up-form"
            hx-post=(endpoints::SIGN_UP_API)
            hx-target="this"
            hx-swap="outerHTML"
            hx-indicator="#indicator"
            hx-disabled-elt="#submit-button"
            class="space-y-4 md:space-y-6"
            novalidate
        {
            div class="grid grid-cols-2 gap-4"
            {
                (field_input(Field::FirstName, form_state.field(Field::FirstName)))
                (field_input(Field::LastName, form_state.field(Field::LastName)))
            }

            (field_input(Field::Email, form_state.field(Field::Email)))
            (field_input(Field::Password, form_state.field(Field::Password)))
            (field_input(Field::ConfirmPassword, form_state.field(Field::ConfirmPassword)))

            (submit_button(form_state.can_submit(), false))

            p class="text-sm font-light text-gray-500 dark:text-gray-400"
            {
                "Already have an account? "

                a href=(endpoints::LOG_IN_VIEW) class=(LINK_STYLE) { "Log in here" }
            }
        }
    }
}

fn field_input(field: Field, state: &FieldState) -> Markup {
    html! {
        div
        {
            input
                type=(field.input_type())
                name=(field.name())
                id=(field.id())
                placeholder=(field.placeholder())
                autocomplete=(field.autocomplete())
                value=[(!field.is_secret()).then_some(&state.value)]
                class=(FORM_TEXT_INPUT_STYLE)
                aria-invalid=[state.shows_error().then_some("true")]
                hx-post=(endpoints::SIGN_UP_VALIDATE_API)
                hx-trigger="input changed delay:150ms"
                hx-include="closest form"
                hx-swap="none"
                required
                autofocus[field == Field::FirstName];

            (field_feedback(field, state, false))
        }
    }
}

/// The helper text under a field.
///
/// Nothing is shown while the field is empty.
fn field_feedback(field: Field, state: &FieldState, out_of_band: bool) -> Markup {
    let message = feedback_message(field, state);
    let style = if state.shows_error() {
        "mt-1 text-red-500 text-base"
    } else {
        "mt-1 text-green-600 text-base"
    };

    html! {
        p
            id=(format!("{}-feedback", field.id()))
            class=(style)
            hx-swap-oob=[out_of_band.then_some("true")]
        {
            @if let Some(message) = message {
                (message)
            }
        }
    }
}

fn feedback_message(field: Field, state: &FieldState) -> Option<&'static str> {
    if state.value.is_empty() {
        return None;
    }

    match (field, state.is_valid) {
        (Field::FirstName | Field::LastName, true) => None,
        (Field::FirstName | Field::LastName, false) => Some("Use letters and spaces only."),
        (Field::Email | Field::Password, true) => Some("Looks good."),
        (Field::Email, false) => Some("Check your email address."),
        (Field::Password, false) => {
            Some("Use 8-20 characters with letters, numbers and symbols.")
        }
        (Field::ConfirmPassword, true) => Some("Passwords match."),
        (Field::ConfirmPassword, false) => Some("Passwords do not match."),
    }
}

fn submit_button(enabled: bool, out_of_band: bool) -> Markup {
    html! {
        button
            type="submit"
            id="submit-button"
            tabindex="0"
            class=(BUTTON_PRIMARY_STYLE)
            disabled[!enabled]
            hx-swap-oob=[out_of_band.then_some("true")]
        {
            span class="inline htmx-indicator" id="indicator"
            {
                (loading_spinner())
            }
            "Sign Up"
        }
    }
}



#[cfg(test)]
mod submit_sign_up_form_tests {
    use std::sync::Arc;

    use axum::{Form, extract::State, http::StatusCode};
    use scraper::Selector;

    use crate::{
        endpoints,
        error::SignUpError,
        services::Session,
        sign_up::{
            controller::{
                SIGN_UP_FAILED_MESSAGE,
                tests::{StubAccountService, valid_sign_up_form},
            },
            form::SignUpForm,
            validation::Field,
        },
        test_utils::{assert_form_input_with_value, assert_hx_redirect, parse_html_fragment},
    };

    use super::{SIGNED_UP_QUERY, SignUpState, submit_sign_up_form};

    #[tokio::test]
    async fn success_redirects_to_log_in() {
        let service = Arc::new(StubAccountService::succeeding());
        let state = SignUpState {
            account_service: service.clone(),
        };

        let response = submit_sign_up_form(
            State(state),
            Session::default(),
            Form(valid_sign_up_form()),
        )
        .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_hx_redirect(
            &response,
            &format!("{}?{SIGNED_UP_QUERY}", endpoints::LOG_IN_VIEW),
        );
        assert_eq!(service.request_count(), 1);
    }

    #[tokio::test]
    async fn failure_clears_form_and_shows_one_alert() {
        let service = Arc::new(StubAccountService::failing(SignUpError::Transport(
            "connection refused".to_owned(),
        )));
        let state = SignUpState {
            account_service: service.clone(),
        };

        let response = submit_sign_up_form(
            State(state),
            Session::default(),
            Form(valid_sign_up_form()),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let fragment = parse_html_fragment(response).await;

        let form = fragment
            .select(&Selector::parse("form").unwrap())
            .next()
            .expect("form missing");
        for field in Field::ALL {
            assert_form_input_with_value(&form, field.name(), field.input_type(), "");
        }

        let alerts = fragment
            .select(&Selector::parse("[role=alert]").unwrap())
            .collect::<Vec<_>>();
        assert_eq!(alerts.len(), 1, "want 1 alert, got {}", alerts.len());
        let alert_text = alerts[0].text().collect::<String>();
        assert!(
            alert_text.contains(SIGN_UP_FAILED_MESSAGE),
            "'{alert_text}' does not contain '{SIGN_UP_FAILED_MESSAGE}'"
        );
        assert_eq!(service.request_count(), 1);
    }

    #[tokio::test]
    async fn invalid_form_is_returned_without_calling_service() {
        let service = Arc::new(StubAccountService::succeeding());
        let state = SignUpState {
            account_service: service.clone(),
        };
        let form = SignUpForm {
            password: "weak".to_owned(),
            confirm_password: "weak".to_owned(),
            ..valid_sign_up_form()
        };

        let response = submit_sign_up_form(State(state), Session::default(), Form(form)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let fragment = parse_html_fragment(response).await;
        assert_eq!(
            fragment
                .select(&Selector::parse("[role=alert]").unwrap())
                .count(),
            0
        );
        let form = fragment
            .select(&Selector::parse("form").unwrap())
            .next()
            .expect("form missing");
        assert_form_input_with_value(&form, "email", "email", "jane@example.com");
        assert_eq!(service.request_count(), 0);
    }

    #[tokio::test]
    async fn invalid_form_does_not_echo_passwords() {
        let service = Arc::new(StubAccountService::succeeding());
        let state = SignUpState {
            account_service: service.clone(),
        };
        let form = SignUpForm {
            email: "jane.example.com".to_owned(),
            password: "hunter2secret!".to_owned(),
            confirm_password: "hunter2secret?".to_owned(),
            ..valid_sign_up_form()
        };

        let response = submit_sign_up_form(State(state), Session::default(), Form(form)).await;

        let fragment = parse_html_fragment(response).await;
        assert!(
            !fragment.html().contains("hunter2secret"),
            "the re-rendered form must not contain the submitted passwords"
        );
        let form = fragment
            .select(&Selector::parse("form").unwrap())
            .next()
            .expect("form missing");
        for field in [Field::Password, Field::ConfirmPassword] {
            let input = form
                .select(&Selector::parse(&format!("input[name={}]", field.name())).unwrap())
                .next()
                .unwrap_or_else(|| panic!("{} input missing", field.name()));
            assert_eq!(input.value().attr("value"), None);
        }
        assert_eq!(service.request_count(), 0);
    }
}
