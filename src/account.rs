//! Account creation hand-off for validated registration forms.

use secrecy::{ExposeSecret, SecretString};
use std::collections::HashSet;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

use crate::config::{ConfigError, SignupConfig};
use crate::evaluator::evaluate_password;
use crate::validation::{trim_input, validate_registration, RegistrationForm, ValidationOutcome};

/// Identifier returned by the account backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountId(pub String);

/// Normalized account data handed to an [`AccountCreator`].
#[derive(Debug)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password: SecretString,
}

impl NewAccount {
    fn from_form(form: &RegistrationForm) -> Self {
        Self {
            name: trim_input(&form.name).to_string(),
            email: trim_input(&form.email).to_string(),
            password: SecretString::new(form.password.expose_secret().to_owned().into_boxed_str()),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("an account already exists for {0}")]
    AlreadyExists(String),
    #[error("account service unavailable: {0}")]
    Unavailable(String),
    #[error("account rejected: {0}")]
    Rejected(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("registration form is not submittable")]
    Invalid(ValidationOutcome),
    #[error(transparent)]
    Account(#[from] AccountError),
    #[error("registration cancelled")]
    Cancelled,
}

/// Backend that creates user accounts.
pub trait AccountCreator {
    fn create_account(
        &self,
        account: &NewAccount,
    ) -> impl Future<Output = Result<AccountId, AccountError>> + Send;
}

/// Validates `form` and hands it to `creator`.
///
/// The form is re-evaluated here so a stale assessment can never let an
/// invalid form through. An invalid form never reaches `creator`.
///
/// # Errors
///
/// - `SubmitError::Invalid` with the field errors if the form fails validation
/// - `SubmitError::Account` if the creator fails
/// - `SubmitError::Cancelled` if `token` is cancelled before creation finishes
pub async fn submit_registration<C: AccountCreator>(
    form: &RegistrationForm,
    creator: &C,
    token: CancellationToken,
) -> Result<AccountId, SubmitError> {
    let assessment = evaluate_password(&form.password);
    let outcome = validate_registration(form, &assessment);
    if !outcome.submittable() {
        #[cfg(feature = "tracing")]
        tracing::debug!("registration rejected by validation: {:?}", outcome);
        return Err(SubmitError::Invalid(outcome));
    }

    let account = NewAccount::from_form(form);

    #[cfg(feature = "tracing")]
    tracing::info!("registration submitted for {}", account.email);

    tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::warn!("registration for {} cancelled", account.email);
            Err(SubmitError::Cancelled)
        }
        result = creator.create_account(&account) => {
            match result {
                Ok(id) => {
                    #[cfg(feature = "tracing")]
                    tracing::info!("account {} created for {}", id.0, account.email);
                    Ok(id)
                }
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::error!("account creation failed: {}", e);
                    Err(SubmitError::Account(e))
                }
            }
        }
    }
}

/// In-process account creator with fixed latency.
///
/// Stands in for a real backend during development and tests. Emails are
/// compared case-insensitively; a second registration for the same email
/// fails with [`AccountError::AlreadyExists`].
#[derive(Debug)]
pub struct SimulatedAccountCreator {
    latency: Duration,
    registered: Mutex<HashSet<String>>,
}

impl SimulatedAccountCreator {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            registered: Mutex::new(HashSet::new()),
        }
    }

    pub fn from_config(config: &SignupConfig) -> Self {
        Self::new(config.signup_latency)
    }

    /// Builds a creator whose latency honours `SIGNUP_LATENCY_MS`.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment holds a malformed value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::from_config(&SignupConfig::from_env()?))
    }

    /// Number of accounts created so far.
    pub async fn account_count(&self) -> usize {
        self.registered.lock().await.len()
    }
}

/// Uses the built-in 1000 ms latency and ignores the environment;
/// see [`SimulatedAccountCreator::from_env`].
impl Default for SimulatedAccountCreator {
    fn default() -> Self {
        Self::from_config(&SignupConfig::default())
    }
}

impl AccountCreator for SimulatedAccountCreator {
    async fn create_account(&self, account: &NewAccount) -> Result<AccountId, AccountError> {
        tokio::time::sleep(self.latency).await;

        let mut registered = self.registered.lock().await;
        let key = account.email.to_lowercase();
        if registered.contains(&key) {
            return Err(AccountError::AlreadyExists(account.email.clone()));
        }
        registered.insert(key);
        Ok(AccountId(format!("user-{}", registered.len())))
    }
}
