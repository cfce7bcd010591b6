//! Core data types for the adder
//!
//! The result value handed to callbacks, the overflow policy, and errors.

use std::fmt;
use std::str::FromStr;

/// Prefix of every result message
pub const MESSAGE_PREFIX: &str = "Result: ";

/// Immutable result delivered to an addition handler
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CalcResult {
    message: String,
}

impl CalcResult {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the result for a computed sum: `Result: <sum>`
    #[must_use]
    pub fn for_sum(sum: i32) -> Self {
        Self::new(format!("{MESSAGE_PREFIX}{sum}"))
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn into_message(self) -> String {
        self.message
    }
}

impl fmt::Display for CalcResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// How a sum outside the `i32` range is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Two's complement wraparound
    #[default]
    Wrapping,
    /// Clamp to `i32::MIN` / `i32::MAX`
    Saturating,
    /// Fail with `AdderError::Overflow`
    Checked,
}

impl OverflowPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wrapping => "wrapping",
            Self::Saturating => "saturating",
            Self::Checked => "checked",
        }
    }
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OverflowPolicy {
    type Err = AdderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wrapping" => Ok(Self::Wrapping),
            "saturating" => Ok(Self::Saturating),
            "checked" => Ok(Self::Checked),
            _ => Err(AdderError::InvalidPolicy {
                value: s.to_string(),
            }),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AdderError {
    #[error("integer overflow adding {a} and {b}")]
    Overflow { a: i32, b: i32 },

    #[error("unknown overflow policy '{value}' (expected wrapping, saturating or checked)")]
    InvalidPolicy { value: String },
}
