//! Runtime configuration
//!
//! Values come from environment variables and fall back to defaults
//! when unset.

use std::time::Duration;
use thiserror::Error;

pub const DEBOUNCE_ENV: &str = "PWD_POLICY_DEBOUNCE_MS";
pub const SIGNUP_LATENCY_ENV: &str = "SIGNUP_LATENCY_MS";

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);
pub const DEFAULT_SIGNUP_LATENCY: Duration = Duration::from_millis(1000);

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a whole number of milliseconds, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
    #[error("{0} is not valid unicode")]
    NotUnicode(&'static str),
}

/// Timing knobs for the signup flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignupConfig {
    /// Pause before evaluating a password after the last keystroke.
    pub debounce: Duration,
    /// Latency of the simulated account creator.
    pub signup_latency: Duration,
}

impl Default for SignupConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            signup_latency: DEFAULT_SIGNUP_LATENCY,
        }
    }
}

impl SignupConfig {
    /// Reads the configuration from the environment.
    ///
    /// Priority:
    /// 1. Environment variables `PWD_POLICY_DEBOUNCE_MS` / `SIGNUP_LATENCY_MS`
    /// 2. Defaults (300 ms / 1000 ms)
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but is not a valid number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            debounce: millis_from_env(DEBOUNCE_ENV, DEFAULT_DEBOUNCE)?,
            signup_latency: millis_from_env(SIGNUP_LATENCY_ENV, DEFAULT_SIGNUP_LATENCY)?,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "signup config loaded: debounce={:?} signup_latency={:?}",
            config.debounce,
            config.signup_latency
        );

        Ok(config)
    }
}

fn millis_from_env(var: &'static str, default: Duration) -> Result<Duration, ConfigError> {
    match std::env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|_| ConfigError::InvalidNumber { var, value: raw }),
        Err(std::env::VarError::NotPresent) => Ok(default),
        Err(std::env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(var)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn set_env(key: &str, value: &str) {
        // SAFETY: env-mutating tests are serialized
        unsafe { std::env::set_var(key, value); }
    }

    fn remove_env(key: &str) {
        // SAFETY: env-mutating tests are serialized
        unsafe { std::env::remove_var(key); }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        remove_env(DEBOUNCE_ENV);
        remove_env(SIGNUP_LATENCY_ENV);

        let config = SignupConfig::from_env().expect("defaults should load");
        assert_eq!(config, SignupConfig::default());
        assert_eq!(config.debounce, Duration::from_millis(300));
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        set_env(DEBOUNCE_ENV, "50");
        set_env(SIGNUP_LATENCY_ENV, " 10 ");

        let config = SignupConfig::from_env().expect("overrides should load");
        assert_eq!(config.debounce, Duration::from_millis(50));
        assert_eq!(config.signup_latency, Duration::from_millis(10));

        remove_env(DEBOUNCE_ENV);
        remove_env(SIGNUP_LATENCY_ENV);
    }

    #[test]
    #[serial]
    fn test_from_env_malformed_value() {
        set_env(DEBOUNCE_ENV, "soon");

        let result = SignupConfig::from_env();
        assert_eq!(
            result,
            Err(ConfigError::InvalidNumber {
                var: DEBOUNCE_ENV,
                value: "soon".to_string(),
            })
        );

        remove_env(DEBOUNCE_ENV);
    }

    #[cfg(unix)]
    #[test]
    #[serial]
    fn test_from_env_not_unicode() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        remove_env(DEBOUNCE_ENV);
        let invalid = OsString::from_vec(vec![0x66, 0x6f, 0x80, 0xff]);
        // SAFETY: env-mutating tests are serialized
        unsafe { std::env::set_var(SIGNUP_LATENCY_ENV, &invalid); }

        let result = SignupConfig::from_env();
        assert_eq!(result, Err(ConfigError::NotUnicode(SIGNUP_LATENCY_ENV)));

        remove_env(SIGNUP_LATENCY_ENV);
    }
}
