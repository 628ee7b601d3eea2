//! Solvers for equation problems — finding roots of equations.
//!
//! An [`EquationProblem<1>`] maps a single solver variable `x` to a model
//! input and turns the model output into a residual. Solvers in this module
//! drive that residual toward zero, sampling it through [`evaluate`].
//!
//! # Solvers
//!
//! - [`secant`] — derivative-free iteration from two initial guesses that
//!   records every iterate for later replay
//!
//! [`EquationProblem<1>`]: rootline_core::EquationProblem

mod evaluate;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};

pub mod secant;
