use rootline_core::Snapshot;

use crate::equation::Evaluation;

use super::{Config, Degeneracy, Iterate, Solution, Status, Trajectory};

/// The two most recent iterates plus everything recorded so far.
pub(super) struct State<I, O> {
    previous: Iterate,
    current: Iterate,
    snapshot: Snapshot<I, O>,
    trajectory: Trajectory,
}

impl<I, O> State<I, O> {
    pub(super) fn new(first: &Evaluation<I, O>, second: Evaluation<I, O>) -> Self {
        let previous = Iterate::from(first);
        let current = Iterate::from(&second);
        Self {
            previous,
            current,
            snapshot: second.snapshot,
            trajectory: Trajectory::new(previous, current),
        }
    }

    pub(super) fn previous(&self) -> Iterate {
        self.previous
    }

    pub(super) fn current(&self) -> Iterate {
        self.current
    }

    /// Iterates recorded after the initial point.
    pub(super) fn iters(&self) -> usize {
        self.trajectory.steps()
    }

    /// True when the secant through the two latest iterates is flat.
    ///
    /// Matches the zero test in [`Degeneracy::quotient`], so two equal
    /// infinite residuals (whose difference is `NaN`) are not flat.
    #[allow(clippy::float_cmp)]
    pub(super) fn is_degenerate(&self) -> bool {
        self.current.y - self.previous.y == 0.0
    }

    /// Pure query: where the secant through the two latest iterates crosses zero.
    ///
    /// Returns `None` when the secant is flat and the policy refuses to divide.
    pub(super) fn secant_x(&self, degeneracy: Degeneracy) -> Option<f64> {
        let Iterate { x: xa, y: ya } = self.previous;
        let Iterate { x: xb, y: yb } = self.current;
        let step = degeneracy.quotient(ya * (xb - xa), yb - ya)?;
        Some(xa - step)
    }

    /// Records a new iterate and makes it the current one.
    pub(super) fn advance(&mut self, point: Iterate, snapshot: Snapshot<I, O>) {
        self.previous = self.current;
        self.current = point;
        self.snapshot = snapshot;
        self.trajectory.push(point);
    }

    pub(super) fn is_converged(&self, config: &Config) -> bool {
        self.current.y.abs() < config.residual_tol()
            || (self.current.x - self.previous.x).abs() < config.x_tol()
    }

    pub(super) fn into_solution(self, status: Status) -> Solution<I, O> {
        Solution {
            status,
            x: self.current.x,
            residual: self.current.y,
            snapshot: self.snapshot,
            iters: self.trajectory.steps(),
            trajectory: self.trajectory,
        }
    }
}
