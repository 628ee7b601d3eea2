//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasResidual`] — events that carry a residual value
//! - [`HasIteration`] — events that know which iterate they describe
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use rootline_core::Observer;
//! use rootline_observers::traits::{CanStopEarly, HasResidual};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         if event.residual().abs() < self.tolerance {
//!             return Some(A::stop_early());
//!         }
//!         None
//!     }
//! }
//! ```

use rootline_core::{EquationProblem, Model};

use rootline_solvers::equation::secant;

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual for this event.
    ///
    /// Returns `f64::NAN` when the event carries no residual, such as a
    /// failed evaluation.
    fn residual(&self) -> f64;
}

/// An event tied to a position in the solver's sequence of iterates.
pub trait HasIteration {
    /// Returns the iteration this event refers to.
    fn iteration(&self) -> usize;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl<M, P> HasResidual for secant::Event<'_, M, P>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    fn residual(&self) -> f64 {
        secant::Event::residual(self).unwrap_or(f64::NAN)
    }
}

impl<M, P> HasIteration for secant::Event<'_, M, P>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    fn iteration(&self) -> usize {
        self.iter()
    }
}

impl CanStopEarly for secant::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rootline_core::{Function, Observer, RootProblem};
    use rootline_solvers::equation::secant::{Config, Event, Guesses, Status};

    struct GoodEnough {
        tolerance: f64,
    }

    impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
        fn observe(&mut self, event: &E) -> Option<A> {
            if event.residual().abs() < self.tolerance {
                return Some(A::stop_early());
            }
            None
        }
    }

    #[test]
    fn generic_observer_stops_secant() {
        let f = Function::new(|x: f64| x * x - 2.0);
        let guesses = Guesses::new(1.0, 2.0).expect("valid guesses");

        let solution = secant::solve(
            &f,
            &RootProblem,
            guesses,
            &Config::default(),
            GoodEnough { tolerance: 0.05 },
        )
        .expect("should stop");

        // Residuals: x2 = 4/3 gives -0.22, x3 = 1.4 gives -0.04.
        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 3);
    }

    #[test]
    fn event_capabilities_match_event_data() {
        let line: fn(f64) -> f64 = |x| x - 3.0;
        let f = Function::new(line);
        let guesses = Guesses::new(0.0, 1.0).expect("valid guesses");

        let mut seen = Vec::new();
        let observer = |event: &Event<'_, Function<fn(f64) -> f64>, RootProblem>| {
            seen.push((HasIteration::iteration(event), HasResidual::residual(event)));
            None
        };

        secant::solve(&f, &RootProblem, guesses, &Config::default(), observer)
            .expect("should converge");

        assert_eq!(seen, vec![(2, 0.0)]);
    }
}
