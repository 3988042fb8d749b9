//! Identity resolution and page access decisions.
//!
//! An [`IdentityProvider`] is injected by the host; its answer is folded
//! into an [`IdentityState`] that [`decide_access`] turns into a
//! render/redirect decision for protected pages.

use std::future::Future;
use thiserror::Error;

pub const LOGIN_PATH: &str = "/login";
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";
pub const VERIFY_EMAIL_PATH: &str = "/verify-email";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Option<String>,
    pub email_verified: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    Anonymous,
    Authenticated(User),
}

impl Identity {
    pub fn user(&self) -> Option<&User> {
        match self {
            Identity::Anonymous => None,
            Identity::Authenticated(user) => Some(user),
        }
    }
}

/// Where identity resolution currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityState {
    Loading,
    Resolved(Identity),
    Failed(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    #[error("identity provider unavailable: {0}")]
    Unavailable(String),
    #[error("session invalid: {0}")]
    InvalidSession(String),
}

/// Source of the current user's identity.
pub trait IdentityProvider {
    fn current_identity(&self) -> impl Future<Output = Result<Identity, IdentityError>> + Send;
}

/// Asks `provider` for the current identity and folds the answer into a state.
pub async fn resolve_identity<P: IdentityProvider>(provider: &P) -> IdentityState {
    match provider.current_identity().await {
        Ok(identity) => {
            #[cfg(feature = "tracing")]
            tracing::debug!("identity resolved: authenticated={}", identity.user().is_some());
            IdentityState::Resolved(identity)
        }
        Err(e) => {
            #[cfg(feature = "tracing")]
            tracing::error!("identity check failed: {}", e);
            IdentityState::Failed(e.to_string())
        }
    }
}

/// Requirements a protected page places on the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessPolicy {
    pub redirect_to: String,
    pub required_role: Option<String>,
    pub require_email_verification: bool,
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self {
            redirect_to: LOGIN_PATH.to_string(),
            required_role: None,
            require_email_verification: false,
        }
    }
}

impl AccessPolicy {
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.required_role = Some(role.into());
        self
    }

    pub fn with_email_verification(mut self) -> Self {
        self.require_email_verification = true;
        self
    }

    pub fn with_redirect(mut self, path: impl Into<String>) -> Self {
        self.redirect_to = path.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// Identity not known yet; show a loading indicator.
    Pending,
    Granted,
    Redirect(String),
}

/// Decides whether the viewer may see a page guarded by `policy`.
///
/// Checks run in order: loading, signed in, role, email verification.
pub fn decide_access(state: &IdentityState, policy: &AccessPolicy) -> AccessDecision {
    let user = match state {
        IdentityState::Loading => return AccessDecision::Pending,
        IdentityState::Failed(_) | IdentityState::Resolved(Identity::Anonymous) => {
            return AccessDecision::Redirect(policy.redirect_to.clone());
        }
        IdentityState::Resolved(Identity::Authenticated(user)) => user,
    };

    if let Some(required) = &policy.required_role {
        if user.role.as_deref() != Some(required.as_str()) {
            return AccessDecision::Redirect(UNAUTHORIZED_PATH.to_string());
        }
    }

    if policy.require_email_verification && !user.email_verified {
        return AccessDecision::Redirect(VERIFY_EMAIL_PATH.to_string());
    }

    AccessDecision::Granted
}
