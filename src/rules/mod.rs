//! Password policy rules
//!
//! Each rule checks one property of the raw password string and
//! contributes one point to the score when it passes.

mod length;
mod special;
mod variety;

use secrecy::SecretString;

use crate::types::RuleName;

pub use length::length_rule;
pub use special::{special_rule, SPECIAL_CHARACTERS};
pub use variety::{lowercase_rule, number_rule, uppercase_rule};

/// Signature shared by every rule check.
pub type RuleCheck = fn(&SecretString) -> bool;

/// Rules in canonical display order.
pub const RULES: [(RuleName, RuleCheck); 5] = [
    (RuleName::Length, length_rule),
    (RuleName::Lowercase, lowercase_rule),
    (RuleName::Uppercase, uppercase_rule),
    (RuleName::Number, number_rule),
    (RuleName::Special, special_rule),
];
