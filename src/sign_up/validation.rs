//! Per-field rules for the sign-up form.
//!
//! Every field has exactly one rule in [RULES]. Rules are pure: they look at the
//! raw value and, for the confirmation field, at the current password.

use std::{ops::RangeInclusive, sync::OnceLock};

use regex::Regex;

/// The fields of the sign-up form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    /// Every field, in the order they appear on the form.
    pub const ALL: [Field; 5] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
    ];

    /// The name of the form input, also the key used when the form is posted.
    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "first_name",
            Field::LastName => "last_name",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirm_password",
        }
    }

    /// The HTML element ID of the input.
    pub fn id(self) -> &'static str {
        match self {
            Field::FirstName => "first-name",
            Field::LastName => "last-name",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirm-password",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Email => "Email Address",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm Password",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            Field::FirstName | Field::LastName => "text",
            Field::Email => "email",
            Field::Password | Field::ConfirmPassword => "password",
        }
    }

    pub fn autocomplete(self) -> &'static str {
        match self {
            Field::FirstName => "given-name",
            Field::LastName => "family-name",
            Field::Email => "email",
            Field::Password | Field::ConfirmPassword => "new-password",
        }
    }

    /// Secret fields are never written back into rendered HTML.
    pub fn is_secret(self) -> bool {
        matches!(self, Field::Password | Field::ConfirmPassword)
    }
}

/// Values from other fields that a rule may depend on.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationContext<'a> {
    /// The current value of the password field.
    pub password: &'a str,
}

type Predicate = fn(&str, &ValidationContext<'_>) -> bool;

/// The rule table: one predicate per field.
pub const RULES: [(Field, Predicate); 5] = [
    (Field::FirstName, check_name),
    (Field::LastName, check_name),
    (Field::Email, check_email),
    (Field::Password, check_password),
    (Field::ConfirmPassword, check_confirm_password),
];

/// Symbols accepted as the "special character" of a password.
pub const PASSWORD_SYMBOLS: &str = "$`~!@%*#^?&\\()-_=+";

/// The number of characters a password may have.
pub const PASSWORD_LENGTH: RangeInclusive<usize> = 8..=20;

/// Check `value` against the rule for `field`.
///
/// Empty values are never valid.
pub fn validate(field: Field, value: &str, context: &ValidationContext<'_>) -> bool {
    RULES
        .iter()
        .find(|(rule_field, _)| *rule_field == field)
        .is_some_and(|(_, predicate)| predicate(value, context))
}

fn check_name(value: &str, _: &ValidationContext<'_>) -> bool {
    static NAME_PATTERN: OnceLock<Regex> = OnceLock::new();

    NAME_PATTERN
        .get_or_init(|| Regex::new(r"^[가-힣a-zA-Z\s]+$").expect("name pattern is valid"))
        .is_match(value)
}

fn check_email(value: &str, _: &ValidationContext<'_>) -> bool {
    static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

    EMAIL_PATTERN
        .get_or_init(|| {
            Regex::new(r"^[A-Za-z0-9+\-/_.]+@[A-Za-z0-9\-]+\.[A-Za-z0-9\-.]+$")
                .expect("email pattern is valid")
        })
        .is_match(value)
}

fn check_password(value: &str, _: &ValidationContext<'_>) -> bool {
    let length = value.chars().count();

    PASSWORD_LENGTH.contains(&length)
        && !value.chars().any(is_line_terminator)
        && value.chars().any(|c| c.is_ascii_alphabetic())
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
}

fn check_confirm_password(value: &str, context: &ValidationContext<'_>) -> bool {
    !value.is_empty() && value == context.password
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}
