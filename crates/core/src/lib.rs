//! # Core - Scalar Operators and Combinators (Session 0)
//!
//! This crate provides the vocabulary a chain-rule differentiation engine is
//! assembled from:
//!
//! - **Operators**: elementary scalar functions and their backward
//!   (local derivative) counterparts
//! - **Ops**: the same operators as enums, with `forward` / `backward`
//!   dispatch
//! - **Combinators**: lazy `map_seq`, `zip_combine`, `reduce` and the list
//!   utilities built from them
//! - **Errors**: domain errors for operators applied outside their domain
//!
//! ## Example
//!
//! ```rust
//! use minitorch_core::operators::{log, log_back, sigmoid};
//! use minitorch_core::combinators::{map_seq, sum_seq};
//!
//! // Forward and backward of log at a = 2, upstream gradient 1.
//! assert_eq!(log_back(2.0, 1.0)?, 0.5);
//! assert!(log(0.0).is_err());
//!
//! // Lift an operator over a list without writing the loop.
//! let total = sum_seq(map_seq(sigmoid, [0.0, 0.0]));
//! assert_eq!(total, 1.0);
//! # Ok::<(), minitorch_core::OperatorError>(())
//! ```

pub mod combinators;
pub mod error;
pub mod operators;
pub mod ops;

// Re-export key types at crate root for convenience
pub use combinators::{
    add_lists, map_seq, neg_list, prod, reduce, sum_seq, zip_combine, Map, ZipCombine,
};
pub use error::OperatorError;
pub use ops::{BinaryOp, UnaryOp};
