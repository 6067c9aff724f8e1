//! Drives one sign-up attempt from a filled-in form to a terminal outcome.
//!
//! ```text
//! Idle -> Submitting -> Succeeded | Failed -> Idle
//! ```
//!
//! The controller never trusts a previously computed "can submit" flag: it
//! re-derives it from the form at the moment of submission.

use crate::{
    alert::Alert,
    error::SignUpError,
    services::{AccountService, Session, SignUpRequest},
    sign_up::{form::FormState, validation::Field},
};

/// The message shown for every failed sign-up, whatever the cause.
pub const SIGN_UP_FAILED_MESSAGE: &str = "This email is already in use.";

/// Where the controller is in a sign-up attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// The terminal result of one sign-up attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// The account was created. The host view should move to the log-in screen.
    Success,
    /// The account was not created and the form has been cleared.
    Failure(SignUpError),
}

impl SubmissionOutcome {
    /// The single notification to show the user for this outcome.
    pub fn notification(&self) -> Alert {
        match self {
            SubmissionOutcome::Success => Alert::Success {
                message: "Sign up complete".to_owned(),
                details: "Your account has been created. Log in to continue.".to_owned(),
            },
            SubmissionOutcome::Failure(_) => Alert::Error {
                message: SIGN_UP_FAILED_MESSAGE.to_owned(),
                details: String::new(),
            },
        }
    }
}

/// Returned when submit is attempted while at least one field is invalid.
#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
#[error("the sign-up form has invalid fields")]
pub struct SubmissionBlocked;

/// Submits sign-up forms to an [AccountService].
pub struct SubmissionController<'a> {
    account_service: &'a dyn AccountService,
    state: SubmissionState,
}

impl<'a> SubmissionController<'a> {
    pub fn new(account_service: &'a dyn AccountService) -> Self {
        Self {
            account_service,
            state: SubmissionState::Idle,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Submit `form` if every field is valid.
    ///
    /// On failure `form` is cleared. On success it is left untouched for the
    /// caller to discard after navigating away.
    ///
    /// # Errors
    ///
    /// Returns [SubmissionBlocked] without contacting the account service if
    /// any field is invalid. The controller stays idle in that case.
    pub async fn submit(
        &mut self,
        form: &mut FormState,
        session: &Session,
    ) -> Result<SubmissionOutcome, SubmissionBlocked> {
        self.state = SubmissionState::Idle;

        if !form.can_submit() {
            return Err(SubmissionBlocked);
        }

        self.state = SubmissionState::Submitting;

        let request = SignUpRequest {
            email: form.value(Field::Email).to_owned(),
            name: form.display_name(),
            password: form.value(Field::Password).to_owned(),
        };

        match self.account_service.sign_up(&request, session).await {
            Ok(()) => {
                tracing::info!("Sign-up succeeded");
                tracing::debug!("Created account for {}", request.email);
                self.state = SubmissionState::Succeeded;

                Ok(SubmissionOutcome::Success)
            }
            Err(error) => {
                tracing::warn!("Sign-up failed: {error}");
                form.reset();
                self.state = SubmissionState::Failed;

                Ok(SubmissionOutcome::Failure(error))
            }
        }
    }

    /// Return to idle after the outcome has been handled.
    pub fn acknowledge(&mut self) {
        self.state = SubmissionState::Idle;
    }
}
