use rootline_core::Snapshot;

use super::Trajectory;

/// How a secant run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Status {
    /// The residual or the iterate spacing fell below its tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// The two most recent residuals were equal and the
    /// [`Degeneracy`](super::Degeneracy) policy is `Stop`.
    Degenerate,

    /// The secant update produced a non-finite iterate.
    Diverged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a secant run.
///
/// `x` is always the x value of the last point in `trajectory`.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// Final solver status.
    pub status: Status,

    /// Root estimate.
    pub x: f64,

    /// Residual at the root estimate.
    pub residual: f64,

    /// Snapshot at the root estimate.
    pub snapshot: Snapshot<I, O>,

    /// Number of iterates recorded after the initial point.
    pub iters: usize,

    /// Every iterate in the order it was produced.
    pub trajectory: Trajectory,
}

impl<I, O> Solution<I, O> {
    /// Returns the root estimate.
    #[must_use]
    pub fn root(&self) -> f64 {
        self.x
    }

    /// Returns the recorded trajectory.
    #[must_use]
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Returns true if the run met a convergence tolerance.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
