//! Secant method for single-variable root finding.
//!
//! # Algorithm
//!
//! Starting from two guesses `x0` and `x1`, each update draws the secant line
//! through the two most recent iterates and takes its zero crossing as the
//! next iterate:
//!
//! ```text
//! x_next = xa - f(xa) * (xb - xa) / (f(xb) - f(xa))
//! ```
//!
//! Every iterate is recorded in a [`Trajectory`], so a run can be replayed
//! step by step after it finishes. If the guesses already satisfy the
//! tolerances the run converges without an update. Otherwise it updates until
//! any of these holds:
//!
//! - `|f(x_next)| < residual_tol` ([`Status::Converged`])
//! - `|x_next - xb| < x_tol` ([`Status::Converged`])
//! - the trajectory holds `max_iters + 1` points ([`Status::MaxIters`])
//! - `f(xb) == f(xa)` under [`Degeneracy::Stop`] ([`Status::Degenerate`])
//! - `x_next` is not finite ([`Status::Diverged`])
//!
//! # Errors
//!
//! A failing model or problem, or a `NaN` residual, aborts the run. Observers
//! can recover from model and problem failures with [`Action::StopEarly`].
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per secant update:
//!
//! - [`Event::Degenerate`] — the secant is flat (before the policy applies)
//! - [`Event::Evaluated`] — the new iterate was evaluated and recorded
//! - [`Event::ModelFailed`] — model returned an error
//! - [`Event::ProblemFailed`] — problem returned an error (input or residual)
//!
//! The initial guesses are evaluated without events.

mod action;
mod config;
mod degeneracy;
mod error;
mod event;
mod guesses;
mod iterate;
mod solution;
mod solver;
mod state;
mod trajectory;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use degeneracy::Degeneracy;
pub use error::Error;
pub use event::Event;
pub use guesses::{GuessError, GuessRange, Guesses};
pub use iterate::Iterate;
pub use solution::{Solution, Status};
pub use solver::SecantSolver;
pub use trajectory::Trajectory;

use rootline_core::{EquationProblem, Model, Observer};
use tracing::{debug, trace, warn};

use crate::equation::{Evaluation, evaluate};

use state::State;

/// Finds a root of the equation with the secant method.
///
/// The observer receives an [`Event`] for each secant update.
/// See the [module docs](self) for stopping rules and event timing.
///
/// # Errors
///
/// Returns an error if the model or problem fails and the observer does not
/// return [`Action::StopEarly`], or if a residual is `NaN`.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    guesses: Guesses,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    let [x0, x1] = guesses.as_array();
    debug!(x0, x1, max_iters = config.max_iters(), "starting secant iteration");

    let first = evaluate_guess(model, problem, x0)?;
    let second = evaluate_guess(model, problem, x1)?;
    let mut state = State::new(&first, second);

    if state.is_converged(config) {
        debug!(x = state.current().x, "second guess is already a root");
        return Ok(state.into_solution(Status::Converged));
    }

    loop {
        let iter = state.iters() + 1;

        if state.is_degenerate() {
            let event = Event::Degenerate {
                iter,
                previous: state.previous(),
                current: state.current(),
            };
            if let Some(Action::StopEarly) = observer.observe(&event) {
                return Ok(state.into_solution(Status::StoppedByObserver));
            }
        }

        let Some(x) = state.secant_x(config.degeneracy()) else {
            warn!(iter, x = state.current().x, "secant is flat, stopping");
            return Ok(state.into_solution(Status::Degenerate));
        };

        if !x.is_finite() {
            warn!(iter, x, "secant update diverged");
            return Ok(state.into_solution(Status::Diverged));
        }

        match evaluate(model, problem, x) {
            Ok(eval) => {
                let residual = eval.residual;
                if residual.is_nan() {
                    return Err(Error::NanResidual { x });
                }
                trace!(iter, x, residual, "secant iterate");

                let point = Iterate::new(x, residual);
                let event = Event::Evaluated {
                    iter,
                    point,
                    previous: state.current(),
                    input: &eval.snapshot.input,
                    output: &eval.snapshot.output,
                };
                let action = observer.observe(&event);

                state.advance(point, eval.snapshot);
                if let Some(Action::StopEarly) = action {
                    return Ok(state.into_solution(Status::StoppedByObserver));
                }
            }
            Err(error) => match Event::<M, P>::emit_failure(iter, x, &error, &mut observer) {
                Some(Action::StopEarly) => {
                    return Ok(state.into_solution(Status::StoppedByObserver));
                }
                None => return Err(error.into()),
            },
        }

        if state.is_converged(config) {
            debug!(iters = state.iters(), x = state.current().x, "secant converged");
            return Ok(state.into_solution(Status::Converged));
        }

        if state.iters() >= config.max_iters() {
            warn!(
                iters = state.iters(),
                x = state.current().x,
                residual = state.current().y,
                "secant reached iteration limit"
            );
            return Ok(state.into_solution(Status::MaxIters));
        }
    }
}

/// Finds a root of the equation without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the model or problem fails, or if a residual is `NaN`.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    guesses: Guesses,
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    solve(model, problem, guesses, config, ())
}

/// Evaluates an initial guess, rejecting `NaN` residuals.
fn evaluate_guess<M, P>(
    model: &M,
    problem: &P,
    x: f64,
) -> Result<Evaluation<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    let eval = evaluate(model, problem, x)?;
    if eval.residual.is_nan() {
        return Err(Error::NanResidual { x });
    }
    Ok(eval)
}
