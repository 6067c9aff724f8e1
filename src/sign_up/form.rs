//! The state of the sign-up form and the single transition that updates it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::sign_up::validation::{Field, ValidationContext, validate};

/// The value of one form field and whether it passes the field's rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub is_valid: bool,
}

impl FieldState {
    /// Whether the field should be highlighted as invalid.
    ///
    /// Empty fields never show an error, even though they are invalid, so
    /// clearing a field also clears its highlight.
    pub fn shows_error(&self) -> bool {
        !self.value.is_empty() && !self.is_valid
    }

    /// Whether positive feedback should be shown for the field.
    pub fn shows_success(&self) -> bool {
        !self.value.is_empty() && self.is_valid
    }
}

/// The state of every field on the sign-up form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    fields: HashMap<Field, FieldState>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    /// An empty form where every field is invalid.
    pub fn new() -> Self {
        let fields = Field::ALL
            .into_iter()
            .map(|field| (field, FieldState::default()))
            .collect();

        Self { fields }
    }

    /// Set the value of `field` and recompute the affected validity flags.
    ///
    /// Changing either the password or its confirmation re-checks the
    /// confirmation against the current password.
    pub fn apply(&mut self, field: Field, value: impl Into<String>) {
        self.field_mut(field).value = value.into();
        self.revalidate(field);

        if field == Field::Password {
            self.revalidate(Field::ConfirmPassword);
        }
    }

    pub fn field(&self, field: Field) -> &FieldState {
        // Every field is inserted in `new` and never removed.
        &self.fields[&field]
    }

    pub fn value(&self, field: Field) -> &str {
        &self.field(field).value
    }

    pub fn is_valid(&self, field: Field) -> bool {
        self.field(field).is_valid
    }

    /// Whether every field is valid.
    pub fn can_submit(&self) -> bool {
        Field::ALL.into_iter().all(|field| self.is_valid(field))
    }

    /// Clear every field through the normal transition, leaving each one invalid.
    pub fn reset(&mut self) {
        for field in Field::ALL {
            self.apply(field, "");
        }
    }

    /// The first and last name joined by a single space.
    pub fn display_name(&self) -> String {
        format!(
            "{} {}",
            self.value(Field::FirstName),
            self.value(Field::LastName)
        )
    }

    fn field_mut(&mut self, field: Field) -> &mut FieldState {
        self.fields.entry(field).or_default()
    }

    fn revalidate(&mut self, field: Field) {
        let password = self.value(Field::Password).to_owned();
        let context = ValidationContext {
            password: &password,
        };
        let is_valid = validate(field, self.value(field), &context);

        self.field_mut(field).is_valid = is_valid;
    }
}

/// The raw values posted by the sign-up form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignUpForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
}

impl From<SignUpForm> for FormState {
    fn from(form: SignUpForm) -> Self {
        let mut state = FormState::new();

        state.apply(Field::FirstName, form.first_name);
        state.apply(Field::LastName, form.last_name);
        state.apply(Field::Email, form.email);
        state.apply(Field::Password, form.password);
        state.apply(Field::ConfirmPassword, form.confirm_password);

        state
    }
}
