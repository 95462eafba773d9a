//! # Error Types
//!
//! A domain error is an operator applied outside the set where it is
//! mathematically defined: `log` of a non-positive number, `inv` at zero.
//! These are reported to the caller rather than folded into `NaN` or `inf`,
//! so a chain-rule pass built on top of the operators fails loudly at the
//! offending primal.

use thiserror::Error;

/// Errors raised by the scalar operators.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum OperatorError {
    /// The primal lies outside the operator's domain.
    #[error("`{op}` is undefined at {value}")]
    Domain { op: &'static str, value: f64 },
}

impl OperatorError {
    pub(crate) fn domain(op: &'static str, value: f64) -> Self {
        OperatorError::Domain { op, value }
    }

    /// Name of the operator that rejected its input.
    pub fn op(&self) -> &'static str {
        match self {
            OperatorError::Domain { op, .. } => op,
        }
    }

    /// The rejected primal value.
    pub fn value(&self) -> f64 {
        match self {
            OperatorError::Domain { value, .. } => *value,
        }
    }
}
