//! Reusable observers for rootline solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across solvers.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasResidual`], [`HasIteration`], [`CanStopEarly`])
//! - [`StallObserver`] — stops a run once the residual stops improving
//!
//! [`Observer`]: rootline_core::Observer
//! [`HasResidual`]: traits::HasResidual
//! [`HasIteration`]: traits::HasIteration
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod stall;

pub use stall::StallObserver;
