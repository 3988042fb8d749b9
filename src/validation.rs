//! Registration form validation
//!
//! Cross-field checks that decide whether a form may be submitted and
//! which inline errors to show.

use secrecy::{ExposeSecret, SecretString};
use std::collections::BTreeMap;
use std::fmt;

use crate::types::PasswordAssessment;

/// Minimum score the password must reach before the form is submittable.
pub const MIN_SUBMIT_SCORE: u8 = 3;

/// Form fields, ordered as they are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
    AcceptTerms,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
            Field::AcceptTerms => "acceptTerms",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of the signup form as typed by the user.
#[derive(Debug)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
    pub accept_terms: bool,
}

impl RegistrationForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
        accept_terms: bool,
    ) -> Self {
        let password: String = password.into();
        let confirm_password: String = confirm_password.into();
        Self {
            name: name.into(),
            email: email.into(),
            password: SecretString::new(password.into_boxed_str()),
            confirm_password: SecretString::new(confirm_password.into_boxed_str()),
            accept_terms,
        }
    }
}

/// Trims whitespace and byte order marks (U+FEFF) from both ends,
/// matching how browsers trim form input.
pub(crate) fn trim_input(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Field errors plus the overall submit gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    field_errors: BTreeMap<Field, String>,
    submittable: bool,
}

impl ValidationOutcome {
    fn from_errors(field_errors: BTreeMap<Field, String>) -> Self {
        let submittable = field_errors.is_empty();
        Self {
            field_errors,
            submittable,
        }
    }

    /// Whether the form may be submitted.
    pub fn submittable(&self) -> bool {
        self.submittable
    }

    /// Error message for `field`, if any.
    pub fn error(&self, field: Field) -> Option<&str> {
        self.field_errors.get(&field).map(String::as_str)
    }

    pub fn has_error(&self, field: Field) -> bool {
        self.field_errors.contains_key(&field)
    }

    /// Errors in display order.
    pub fn errors(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        self.field_errors.iter().map(|(f, m)| (*f, m.as_str()))
    }

    pub fn is_clean(&self) -> bool {
        self.field_errors.is_empty()
    }
}

/// Validates a registration form against its password assessment.
///
/// Every check runs independently, so several fields can fail at once.
/// The form is submittable only when no check fails.
///
/// `assessment` is expected to come from
/// [`evaluate_password`](crate::evaluate_password) on `form.password`.
pub fn validate_registration(
    form: &RegistrationForm,
    assessment: &PasswordAssessment,
) -> ValidationOutcome {
    let mut errors = BTreeMap::new();
    let password = form.password.expose_secret();
    let confirm = form.confirm_password.expose_secret();

    if trim_input(&form.name).is_empty() {
        errors.insert(Field::Name, "Name is required".to_string());
    }

    if trim_input(&form.email).is_empty() {
        errors.insert(Field::Email, "Email is required".to_string());
    }

    if password.is_empty() {
        errors.insert(Field::Password, "Password is required".to_string());
    } else if assessment.score() < MIN_SUBMIT_SCORE {
        errors.insert(Field::Password, "Password is too weak".to_string());
    }

    if confirm.is_empty() {
        errors.insert(
            Field::ConfirmPassword,
            "Please confirm your password".to_string(),
        );
    } else if confirm != password {
        errors.insert(
            Field::ConfirmPassword,
            "Passwords do not match".to_string(),
        );
    }

    if !form.accept_terms {
        errors.insert(
            Field::AcceptTerms,
            "You must accept the Terms of Service and Privacy Policy".to_string(),
        );
    }

    ValidationOutcome::from_errors(errors)
}

/// Validates the password reset request form.
///
/// Only presence is checked; address format is left to the caller.
pub fn validate_reset_request(email: &str) -> ValidationOutcome {
    let mut errors = BTreeMap::new();
    if trim_input(email).is_empty() {
        errors.insert(Field::Email, "Email is required".to_string());
    }
    ValidationOutcome::from_errors(errors)
}
