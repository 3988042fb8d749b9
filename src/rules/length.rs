//! Length rule - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};

pub const MIN_LENGTH: usize = 8;

/// Passes when the password has at least [`MIN_LENGTH`] characters.
///
/// Length is measured in UTF-16 code units, the way browsers report it:
/// a character outside the Basic Multilingual Plane (most emoji) counts twice.
pub fn length_rule(password: &SecretString) -> bool {
    password.expose_secret().encode_utf16().count() >= MIN_LENGTH
}
