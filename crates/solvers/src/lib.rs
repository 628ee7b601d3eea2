//! Numerical solvers for rootline.
//!
//! Solvers are generic over a [`Model`] and a problem trait from
//! `rootline-core`, and accept an [`Observer`] for monitoring or steering the
//! iteration.
//!
//! # Modules
//!
//! - [`equation`] — root finding for [`EquationProblem`]s
//!
//! [`Model`]: rootline_core::Model
//! [`Observer`]: rootline_core::Observer
//! [`EquationProblem`]: rootline_core::EquationProblem

pub mod equation;
