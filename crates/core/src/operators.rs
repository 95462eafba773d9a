//! # Scalar Operators (Session 0)
//!
//! The elementary functions every higher-level differentiable op is built
//! from, together with the local derivatives needed to run the chain rule by
//! hand.
//!
//! ## Forward / Backward
//!
//! | Forward | Backward `(a, d)` |
//! |---------|-------------------|
//! | `log(a)` | `d / a` |
//! | `inv(a)` | `-d / a²` |
//! | `relu(a)` | `d` if `a > 0` else `0` |
//!
//! A backward function takes the primal `a` that was fed to the forward
//! function and the upstream gradient `d`, and returns `f'(a) * d`.
//!
//! ## Domains
//!
//! `log`, `inv` and their backward functions only accept primals in their
//! domain and return [`OperatorError::Domain`] otherwise. Everything else is
//! total over `f64`.

use crate::error::OperatorError;

/// Absolute tolerance used by [`is_close`].
pub const IS_CLOSE_TOLERANCE: f64 = 1e-2;

/// `a * b`
pub fn mul(a: f64, b: f64) -> f64 {
    a * b
}

/// Identity.
pub fn id(a: f64) -> f64 {
    a
}

/// `a + b`
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// `-a`
pub fn neg(a: f64) -> f64 {
    -a
}

/// Strict `a < b`.
pub fn lt(a: f64, b: f64) -> bool {
    a < b
}

/// Exact equality, no tolerance.
#[allow(clippy::float_cmp)]
pub fn eq(a: f64, b: f64) -> bool {
    a == b
}

/// The larger of `a` and `b`. Ties return `b`.
pub fn max_scalar(a: f64, b: f64) -> f64 {
    if lt(b, a) {
        a
    } else {
        b
    }
}

/// `|a - b| < 0.01`.
///
/// This is a closeness check, not an equivalence relation: it is not
/// transitive.
pub fn is_close(a: f64, b: f64) -> bool {
    (a - b).abs() < IS_CLOSE_TOLERANCE
}

/// Logistic function `1 / (1 + e^{-a})`.
///
/// Evaluated as `e^a / (1 + e^a)` for negative `a` so that `e^{-a}` never
/// overflows.
pub fn sigmoid(a: f64) -> f64 {
    if a >= 0.0 {
        1.0 / (1.0 + (-a).exp())
    } else {
        let e = a.exp();
        e / (1.0 + e)
    }
}

/// `max(0, a)`
pub fn relu(a: f64) -> f64 {
    max_scalar(0.0, a)
}

/// Natural logarithm. Requires `a > 0`.
pub fn log(a: f64) -> Result<f64, OperatorError> {
    require_positive("log", a)?;
    Ok(a.ln())
}

/// `e^a`. Overflows to `inf` for large `a`.
pub fn exp(a: f64) -> f64 {
    a.exp()
}

/// `1 / a`. Requires `a != 0`.
pub fn inv(a: f64) -> Result<f64, OperatorError> {
    require_nonzero("inv", a)?;
    Ok(1.0 / a)
}

/// Backward of [`log`]: `d / a`.
pub fn log_back(a: f64, d: f64) -> Result<f64, OperatorError> {
    require_positive("log_back", a)?;
    Ok(d / a)
}

/// Backward of [`inv`]: `-d / a²`.
pub fn inv_back(a: f64, d: f64) -> Result<f64, OperatorError> {
    require_nonzero("inv_back", a)?;
    Ok(-d / (a * a))
}

/// Backward of [`relu`]: `d` where `a > 0`, else `0`.
///
/// The kink at `a == 0` takes the zero branch.
pub fn relu_back(a: f64, d: f64) -> f64 {
    if a > 0.0 {
        d
    } else {
        0.0
    }
}

// NaN fails `a > 0.0`, so it is rejected here as well.
fn require_positive(op: &'static str, a: f64) -> Result<(), OperatorError> {
    if a > 0.0 {
        Ok(())
    } else {
        Err(OperatorError::domain(op, a))
    }
}

fn require_nonzero(op: &'static str, a: f64) -> Result<(), OperatorError> {
    if a == 0.0 {
        Err(OperatorError::domain(op, a))
    } else {
        Ok(())
    }
}
