//! # Operator Vocabulary (Session 0)
//!
//! [`UnaryOp`] and [`BinaryOp`] name the scalar operators so that code
//! building a differentiation pass can store "which op ran here" as data and
//! dispatch both directions from it.
//!
//! ## Operations
//!
//! | Op | Forward | Backward `(a, d)` |
//! |----|---------|-------------------|
//! | Id | a | d |
//! | Neg | -a | -d |
//! | Sigmoid | σ(a) | σ(a)(1 - σ(a)) d |
//! | Relu | max(0, a) | d if a > 0 else 0 |
//! | Log | ln a | d / a |
//! | Exp | eᵃ | eᵃ d |
//! | Inv | 1 / a | -d / a² |
//! | Add | a + b | (d, d) |
//! | Mul | a b | (b d, a d) |
//! | Max | max(a, b) | d to whichever input was returned |

use std::fmt;

use crate::error::OperatorError;
use crate::operators;

/// Single-argument scalar operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Id,
    Neg,
    Sigmoid,
    Relu,
    Log,
    Exp,
    Inv,
}

impl UnaryOp {
    pub const ALL: [UnaryOp; 7] = [
        UnaryOp::Id,
        UnaryOp::Neg,
        UnaryOp::Sigmoid,
        UnaryOp::Relu,
        UnaryOp::Log,
        UnaryOp::Exp,
        UnaryOp::Inv,
    ];

    /// Evaluate the operator at `a`.
    pub fn forward(&self, a: f64) -> Result<f64, OperatorError> {
        match self {
            UnaryOp::Id => Ok(operators::id(a)),
            UnaryOp::Neg => Ok(operators::neg(a)),
            UnaryOp::Sigmoid => Ok(operators::sigmoid(a)),
            UnaryOp::Relu => Ok(operators::relu(a)),
            UnaryOp::Log => operators::log(a),
            UnaryOp::Exp => Ok(operators::exp(a)),
            UnaryOp::Inv => operators::inv(a),
        }
    }

    /// Local derivative at the primal `a`, scaled by the upstream gradient `d`.
    pub fn backward(&self, a: f64, d: f64) -> Result<f64, OperatorError> {
        match self {
            UnaryOp::Id => Ok(d),
            UnaryOp::Neg => Ok(operators::neg(d)),
            UnaryOp::Sigmoid => {
                let s = operators::sigmoid(a);
                Ok(s * (1.0 - s) * d)
            }
            UnaryOp::Relu => Ok(operators::relu_back(a, d)),
            UnaryOp::Log => operators::log_back(a, d),
            UnaryOp::Exp => Ok(operators::exp(a) * d),
            UnaryOp::Inv => operators::inv_back(a, d),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            UnaryOp::Id => "id",
            UnaryOp::Neg => "neg",
            UnaryOp::Sigmoid => "sigmoid",
            UnaryOp::Relu => "relu",
            UnaryOp::Log => "log",
            UnaryOp::Exp => "exp",
            UnaryOp::Inv => "inv",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Two-argument scalar operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Mul,
    Max,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 3] = [BinaryOp::Add, BinaryOp::Mul, BinaryOp::Max];

    pub fn forward(&self, a: f64, b: f64) -> f64 {
        match self {
            BinaryOp::Add => operators::add(a, b),
            BinaryOp::Mul => operators::mul(a, b),
            BinaryOp::Max => operators::max_scalar(a, b),
        }
    }

    /// Gradients with respect to `(a, b)` given the upstream gradient `d`.
    pub fn backward(&self, a: f64, b: f64, d: f64) -> (f64, f64) {
        match self {
            // z = a + b
            BinaryOp::Add => (d, d),
            // z = a * b
            BinaryOp::Mul => (operators::mul(b, d), operators::mul(a, d)),
            // Same tie-break as `max_scalar`: `b` wins unless `b < a`.
            BinaryOp::Max => {
                if operators::lt(b, a) {
                    (d, 0.0)
                } else {
                    (0.0, d)
                }
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BinaryOp::Add => "add",
            BinaryOp::Mul => "mul",
            BinaryOp::Max => "max",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
