//! Password policy evaluator - runs every rule and derives score and strength.

use secrecy::SecretString;

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::rules::RULES;
use crate::types::{PasswordAssessment, PasswordRuleResult};

/// Evaluates a password against every policy rule.
///
/// Total and side-effect free: an empty password yields all rules failed,
/// score 0 and [`PasswordStrength::Weak`](crate::PasswordStrength::Weak).
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// A `PasswordAssessment` with per-rule results, score and strength.
pub fn evaluate_password(password: &SecretString) -> PasswordAssessment {
    // Orchestrator: every rule runs, none short-circuits
    let entries = RULES.map(|(name, check)| (name, check(password)));
    PasswordAssessment::from_rules(PasswordRuleResult::new(entries))
}

/// Debounced version that sends the assessment via channel.
///
/// Waits `debounce`, then evaluates unless `token` was cancelled in the
/// meantime. A cancelled evaluation sends nothing.
#[cfg(feature = "async")]
pub async fn evaluate_password_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordAssessment>,
    debounce: Duration,
) {
    tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("password evaluation cancelled before debounce elapsed");
            return;
        }
        _ = tokio::time::sleep(debounce) => {}
    }

    let assessment = evaluate_password(password);

    if let Err(e) = tx.send(assessment).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password assessment: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}
