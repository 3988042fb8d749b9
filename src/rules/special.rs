//! Special character rule.

use secrecy::{ExposeSecret, SecretString};

/// The fixed set of characters that count as "special".
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Passes when the password contains a character from [`SPECIAL_CHARACTERS`].
pub fn special_rule(password: &SecretString) -> bool {
    password
        .expose_secret()
        .chars()
        .any(|c| SPECIAL_CHARACTERS.contains(c))
}
