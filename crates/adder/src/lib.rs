//! Adder
//!
//! Adds two integers and delivers the formatted result to a handler,
//! synchronously and exactly once.

pub use adder_core::{AdderError, CalcResult, MESSAGE_PREFIX, OverflowPolicy};

mod config;

pub use config::{AdderConfig, OVERFLOW_ENV_VAR};

/// Add `a` and `b` with wraparound and pass the result to `handler`.
///
/// The handler runs on the caller's thread before this function returns.
pub fn add<F>(a: i32, b: i32, handler: F)
where
    F: FnOnce(CalcResult),
{
    let sum = a.wrapping_add(b);
    tracing::debug!(a, b, sum, policy = %OverflowPolicy::Wrapping, "add");
    handler(CalcResult::for_sum(sum));
}

/// Adder with a configurable overflow policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Adder {
    policy: OverflowPolicy,
}

impl Adder {
    #[must_use]
    pub const fn new(policy: OverflowPolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub const fn from_config(config: &AdderConfig) -> Self {
        Self::new(config.overflow)
    }

    #[must_use]
    pub const fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    /// Sum `a` and `b` under this adder's overflow policy
    ///
    /// # Errors
    ///
    /// Returns `AdderError::Overflow` if the policy is `Checked` and the sum
    /// does not fit in an `i32`
    pub fn sum(&self, a: i32, b: i32) -> Result<i32, AdderError> {
        match self.policy {
            OverflowPolicy::Wrapping => Ok(a.wrapping_add(b)),
            OverflowPolicy::Saturating => Ok(a.saturating_add(b)),
            OverflowPolicy::Checked => a.checked_add(b).ok_or_else(|| {
                tracing::warn!(a, b, "rejected overflowing addition");
                AdderError::Overflow { a, b }
            }),
        }
    }

    /// Add `a` and `b` and pass the result to `handler`
    ///
    /// On success the handler has been called exactly once when this returns.
    ///
    /// # Errors
    ///
    /// Returns `AdderError::Overflow` under the `Checked` policy; the handler
    /// is not called in that case
    pub fn add<F>(&self, a: i32, b: i32, handler: F) -> Result<(), AdderError>
    where
        F: FnOnce(CalcResult),
    {
        let sum = self.sum(a, b)?;
        tracing::debug!(a, b, sum, policy = %self.policy, "add");
        handler(CalcResult::for_sum(sum));
        Ok(())
    }
}
