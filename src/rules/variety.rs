//! Character class rules - lowercase, uppercase and digits.
//!
//! Only ASCII letters and digits count; accented letters or other
//! scripts do not satisfy these rules.

use secrecy::{ExposeSecret, SecretString};

/// Passes when the password contains a character in `a-z`.
pub fn lowercase_rule(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| c.is_ascii_lowercase())
}

/// Passes when the password contains a character in `A-Z`.
pub fn uppercase_rule(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| c.is_ascii_uppercase())
}

/// Passes when the password contains a digit `0-9`.
pub fn number_rule(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_lowercase_rule() {
        assert!(lowercase_rule(&secret("ABCd")));
        assert!(!lowercase_rule(&secret("ABC123!")));
        assert!(!lowercase_rule(&secret("ÉÀé")));
    }

    #[test]
    fn test_uppercase_rule() {
        assert!(uppercase_rule(&secret("abcD")));
        assert!(!uppercase_rule(&secret("abc123!")));
        assert!(!uppercase_rule(&secret("Ω")));
    }

    #[test]
    fn test_number_rule() {
        assert!(number_rule(&secret("abc9")));
        assert!(!number_rule(&secret("abcdef")));
        // Arabic-Indic digit is not a decimal digit 0-9
        assert!(!number_rule(&secret("٣")));
    }
}
