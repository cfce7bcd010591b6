use adder_core::{AdderError, OverflowPolicy};
use std::env;

/// Environment variable selecting the default overflow policy
pub const OVERFLOW_ENV_VAR: &str = "ADDER_OVERFLOW";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdderConfig {
    pub overflow: OverflowPolicy,
}

impl AdderConfig {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns `AdderError::InvalidPolicy` if `ADDER_OVERFLOW` is set to an
    /// unknown policy
    pub fn from_env() -> Result<Self, AdderError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to
    /// its value if set
    ///
    /// # Errors
    ///
    /// Returns `AdderError::InvalidPolicy` for an unknown policy name
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AdderError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let overflow = match lookup(OVERFLOW_ENV_VAR) {
            Some(value) if !value.trim().is_empty() => value.parse()?,
            _ => OverflowPolicy::default(),
        };
        Ok(Self { overflow })
    }
}
