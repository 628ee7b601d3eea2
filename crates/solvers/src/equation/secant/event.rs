use rootline_core::{EquationProblem, Model, Observer};

use crate::equation::EvalError;

use super::{Action, Iterate};

/// Events emitted by the secant solver.
///
/// Events are emitted for each secant update, never for the two initial
/// guesses. `iter` is the position the new iterate takes in the trajectory,
/// so the first update reports `iter == 2`.
pub enum Event<'a, M, P>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    /// A new iterate was evaluated and recorded.
    Evaluated {
        /// Trajectory index of the new iterate.
        iter: usize,

        /// The new iterate.
        point: Iterate,

        /// The iterate recorded just before this one.
        previous: Iterate,

        /// The model input at this point.
        input: &'a M::Input,

        /// The model output at this point.
        output: &'a M::Output,
    },

    /// The two most recent residuals are equal, so the secant is flat.
    ///
    /// Emitted before the configured [`Degeneracy`](super::Degeneracy) policy
    /// is applied.
    Degenerate {
        /// Trajectory index the next iterate would have taken.
        iter: usize,

        /// The older of the two iterates.
        previous: Iterate,

        /// The newer of the two iterates.
        current: Iterate,
    },

    /// Model evaluation failed.
    ModelFailed {
        /// Trajectory index the iterate would have taken.
        iter: usize,

        /// The x value where evaluation failed.
        x: f64,

        /// The model error.
        error: &'a M::Error,
    },

    /// Problem method failed (input construction or residual computation).
    ProblemFailed {
        /// Trajectory index the iterate would have taken.
        iter: usize,

        /// The x value where evaluation failed.
        x: f64,

        /// The problem error.
        error: &'a P::Error,
    },
}

impl<M, P> Event<'_, M, P>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    /// Returns the trajectory index this event refers to.
    #[must_use]
    pub fn iter(&self) -> usize {
        match self {
            Self::Evaluated { iter, .. }
            | Self::Degenerate { iter, .. }
            | Self::ModelFailed { iter, .. }
            | Self::ProblemFailed { iter, .. } => *iter,
        }
    }

    /// Returns the x value that was evaluated (or attempted).
    ///
    /// For [`Event::Degenerate`] this is the newer iterate's x.
    #[must_use]
    pub fn x(&self) -> f64 {
        match self {
            Self::Evaluated { point, .. } => point.x,
            Self::Degenerate { current, .. } => current.x,
            Self::ModelFailed { x, .. } | Self::ProblemFailed { x, .. } => *x,
        }
    }

    /// Returns the residual of a successful evaluation.
    #[must_use]
    pub fn residual(&self) -> Option<f64> {
        match self {
            Self::Evaluated { point, .. } => Some(point.y),
            Self::Degenerate { .. } | Self::ModelFailed { .. } | Self::ProblemFailed { .. } => {
                None
            }
        }
    }

    /// Emits a failure event and returns the observer's action.
    pub(super) fn emit_failure<Obs>(
        iter: usize,
        x: f64,
        error: &EvalError<M::Error, P::Error>,
        observer: &mut Obs,
    ) -> Option<Action>
    where
        Obs: for<'a> Observer<Event<'a, M, P>, Action>,
    {
        match error {
            EvalError::Model(e) => {
                let event = Event::ModelFailed { iter, x, error: e };
                observer.observe(&event)
            }
            EvalError::Problem(e) => {
                let event = Event::ProblemFailed { iter, x, error: e };
                observer.observe(&event)
            }
        }
    }
}
