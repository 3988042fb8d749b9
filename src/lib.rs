//! Signup policy library
//!
//! This library evaluates password strength against a fixed five-rule
//! policy and validates registration forms before they are submitted.
//!
//! # Features
//!
//! - `async` (default): Enables debounced evaluation and cancellable
//!   registration submission
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_POLICY_DEBOUNCE_MS`: Debounce before evaluating a password (default: 300)
//! - `SIGNUP_LATENCY_MS`: Latency of the simulated account creator (default: 1000),
//!   honoured by `SimulatedAccountCreator::from_env`
//!
//! # Example
//!
//! ```rust
//! use signup_policy::{evaluate_password, validate_registration, PasswordStrength, RegistrationForm};
//!
//! let form = RegistrationForm::new("Ada", "ada@example.com", "Abcdefg1!", "Abcdefg1!", true);
//!
//! let assessment = evaluate_password(&form.password);
//! assert_eq!(assessment.strength(), PasswordStrength::Strong);
//!
//! let outcome = validate_registration(&form, &assessment);
//! assert!(outcome.submittable());
//! ```

// Internal modules
mod config;
mod evaluator;
mod identity;
mod rules;
mod types;
mod validation;

#[cfg(feature = "async")]
mod account;

// Public API
pub use config::{ConfigError, SignupConfig};
pub use evaluator::evaluate_password;
pub use identity::{
    decide_access, resolve_identity, AccessDecision, AccessPolicy, Identity, IdentityError,
    IdentityProvider, IdentityState, User,
};
pub use rules::SPECIAL_CHARACTERS;
pub use types::{PasswordAssessment, PasswordRuleResult, PasswordStrength, RuleName};
pub use validation::{
    validate_registration, validate_reset_request, Field, RegistrationForm, ValidationOutcome,
    MIN_SUBMIT_SCORE,
};

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_tx;

#[cfg(feature = "async")]
pub use account::{
    submit_registration, AccountCreator, AccountError, AccountId, NewAccount,
    SimulatedAccountCreator, SubmitError,
};
