//! Session 0: Scalar Operators and Sequence Combinators
//!
//! Run with: cargo run -p minitorch-core --example session0_operators
//!
//! This example demonstrates:
//! - Elementary operators and their backward functions
//! - The chain rule applied by hand
//! - Domain errors as values, not NaN
//! - Lifting operators onto lists with map / zip / reduce
//!
//! Key insight: a backward function is just another scalar function of the
//! primal and the upstream gradient. Composition does the rest.

use minitorch_core::operators::{inv, log, relu_back, sigmoid};
use minitorch_core::{
    add_lists, map_seq, neg_list, prod, sum_seq, zip_combine, BinaryOp, OperatorError, UnaryOp,
};

fn main() -> Result<(), OperatorError> {
    println!("=== Session 0: Scalar Operators and Sequence Combinators ===\n");

    // -------------------------------------------------------------------------
    // 1. Forward and Backward
    // -------------------------------------------------------------------------
    println!("1. Forward and Backward");
    println!("-----------------------");
    println!();
    println!("{:<8} {:>10} {:>12}", "op", "f(0.5)", "f'(0.5)·1");
    for op in UnaryOp::ALL {
        let y = op.forward(0.5)?;
        let dy = op.backward(0.5, 1.0)?;
        println!("{:<8} {:>10.5} {:>12.5}", op, y, dy);
    }
    println!();

    println!("Stable sigmoid at the extremes:");
    println!("  sigmoid(-1000) = {}", sigmoid(-1000.0));
    println!("  sigmoid( 1000) = {}", sigmoid(1000.0));
    println!();

    // -------------------------------------------------------------------------
    // 2. Chain Rule by Hand
    // -------------------------------------------------------------------------
    println!("2. Chain Rule by Hand");
    println!("---------------------");
    println!();
    println!("y = sigmoid(w * x), dy/dw at w = 2, x = 0.25");

    let (w, x) = (2.0, 0.25);
    let z = BinaryOp::Mul.forward(w, x);
    let y = UnaryOp::Sigmoid.forward(z)?;
    let dz = UnaryOp::Sigmoid.backward(z, 1.0)?;
    let (dw, dx) = BinaryOp::Mul.backward(w, x, dz);
    println!("  y     = {:.6}", y);
    println!("  dy/dw = {:.6}", dw);
    println!("  dy/dx = {:.6}", dx);
    println!();

    // -------------------------------------------------------------------------
    // 3. Domain Errors
    // -------------------------------------------------------------------------
    println!("3. Domain Errors");
    println!("----------------");
    println!();
    for result in [log(-1.0), inv(0.0)] {
        match result {
            Ok(v) => println!("  ok: {}", v),
            Err(e) => println!("  error: {}", e),
        }
    }
    println!();

    // -------------------------------------------------------------------------
    // 4. Sequence Combinators
    // -------------------------------------------------------------------------
    println!("4. Sequence Combinators");
    println!("-----------------------");
    println!();

    let activations = vec![-1.0, 0.0, 0.5, 2.0];
    let upstream = vec![1.0, 1.0, 1.0, 1.0, 1.0];
    let grads: Vec<f64> = map_seq(
        |(a, d)| relu_back(a, d),
        zip_combine(activations.iter().copied(), upstream.iter().copied()),
    )
    .collect();
    println!("relu_back over {:?}:", activations);
    println!("  {:?}", grads);
    println!();

    println!("neg_list([1, 2, 3])        = {:?}", neg_list([1.0, 2.0, 3.0]));
    println!(
        "add_lists([1, 2, 3], [10, 20]) = {:?}",
        add_lists([1.0, 2.0, 3.0], [10.0, 20.0])
    );
    println!("sum_seq([1, 2, 3, 4])      = {}", sum_seq([1.0, 2.0, 3.0, 4.0]));
    println!("prod([1, 2, 3, 4])         = {}", prod([1.0, 2.0, 3.0, 4.0]));
    println!("sum_seq([])                = {}", sum_seq(Vec::new()));
    println!("prod([])                   = {}  (empty product is 0, not 1)", prod(Vec::new()));

    let logs: Result<Vec<f64>, OperatorError> = map_seq(log, [1.0, 0.0, 2.0]).collect();
    println!();
    println!("map_seq(log, [1, 0, 2]) -> {:?}", logs.map_err(|e| e.to_string()));

    Ok(())
}
