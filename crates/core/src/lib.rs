//! Core traits and types for rootline.
//!
//! This crate defines the shared abstractions that solvers, observers, and
//! models build on:
//!
//! - [`Model`] — a callable that maps a typed input to a typed output
//! - [`Snapshot`] — a captured input/output pair from a model call
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`EquationProblem`] — adapts solver variables to model inputs and extracts
//!   residuals from outputs
//! - [`Function`], [`FallibleFunction`], [`RootProblem`] — the shortest path
//!   from a plain `f64 -> f64` function to something a solver can drive

mod function;
mod model;
mod observer;
mod problems;

pub use function::{FallibleFunction, Function, RootProblem};
pub use observer::Observer;
pub use problems::EquationProblem;
pub use {model::Model, model::Snapshot};
