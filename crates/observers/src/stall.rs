use rootline_core::Observer;
use tracing::debug;

use crate::traits::{CanStopEarly, HasIteration, HasResidual};

/// Stops a solver once the residual magnitude has failed to improve for
/// `patience` consecutive events.
///
/// Events without a residual (failed evaluations, flat secants) are ignored.
#[derive(Debug, Clone)]
pub struct StallObserver {
    patience: usize,
    best: f64,
    stalled: usize,
}

impl StallObserver {
    /// Creates an observer that tolerates `patience` non-improving events.
    #[must_use]
    pub fn new(patience: usize) -> Self {
        Self {
            patience,
            best: f64::INFINITY,
            stalled: 0,
        }
    }

    /// Returns the smallest residual magnitude seen so far.
    #[must_use]
    pub fn best_residual(&self) -> Option<f64> {
        self.best.is_finite().then_some(self.best)
    }

    /// Returns the current run of non-improving events.
    #[must_use]
    pub fn stalled(&self) -> usize {
        self.stalled
    }
}

impl<E, A> Observer<E, A> for StallObserver
where
    E: HasResidual + HasIteration,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let magnitude = event.residual().abs();
        if magnitude.is_nan() {
            return None;
        }

        if magnitude < self.best {
            self.best = magnitude;
            self.stalled = 0;
            return None;
        }

        self.stalled += 1;
        if self.stalled >= self.patience {
            debug!(
                iteration = event.iteration(),
                best = self.best,
                "residual stalled, stopping"
            );
            return Some(A::stop_early());
        }
        None
    }
}

/// Allows passing `&mut StallObserver` so its state can be inspected after solving.
impl<E, A> Observer<E, A> for &mut StallObserver
where
    E: HasResidual + HasIteration,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rootline_core::{Function, RootProblem};
    use rootline_solvers::equation::secant::{self, Config, Degeneracy, Guesses, Status};

    struct Sample(usize, f64);

    impl HasResidual for Sample {
        fn residual(&self) -> f64 {
            self.1
        }
    }

    impl HasIteration for Sample {
        fn iteration(&self) -> usize {
            self.0
        }
    }

    #[derive(Debug, PartialEq)]
    struct Stop;

    impl CanStopEarly for Stop {
        fn stop_early() -> Self {
            Stop
        }
    }

    #[test]
    fn improvement_resets_the_count() {
        let mut observer = StallObserver::new(2);

        assert_eq!(observer.observe(&Sample(1, 4.0)), None::<Stop>);
        assert_eq!(observer.observe(&Sample(2, -5.0)), None::<Stop>);
        assert_eq!(observer.stalled(), 1);
        assert_eq!(observer.observe(&Sample(3, 1.0)), None::<Stop>);
        assert_eq!(observer.stalled(), 0);
        assert_eq!(observer.observe(&Sample(4, 1.0)), None::<Stop>);
        assert_eq!(observer.observe(&Sample(5, 2.0)), Some(Stop));
        assert_relative_eq!(observer.best_residual().expect("seen"), 1.0);
    }

    #[test]
    fn missing_residuals_are_ignored() {
        let mut observer = StallObserver::new(1);

        assert_eq!(observer.observe(&Sample(1, f64::NAN)), None::<Stop>);
        assert_eq!(observer.best_residual(), None);
        assert_eq!(observer.stalled(), 0);
    }

    #[test]
    fn stops_a_perturbed_constant_function() {
        let f = Function::new(|_: f64| 1.0);
        let guesses = Guesses::new(0.0, 1.0).expect("valid guesses");
        let config = Config::default()
            .with_degeneracy(Degeneracy::perturb())
            .expect("valid policy");

        let mut observer = StallObserver::new(3);
        let solution = secant::solve(&f, &RootProblem, guesses, &config, &mut observer)
            .expect("should stop");

        // Iterate 2 sets the best residual; iterates 3, 4 and 5 fail to improve on it.
        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 5);
        assert_eq!(observer.stalled(), 3);
    }

    #[test]
    fn leaves_a_converging_run_alone() {
        let f = Function::new(|x: f64| x * x - 2.0);
        let guesses = Guesses::new(1.0, 2.0).expect("valid guesses");

        let solution = secant::solve(
            &f,
            &RootProblem,
            guesses,
            &Config::default(),
            StallObserver::new(2),
        )
        .expect("should converge");

        assert_eq!(solution.status, Status::Converged);
    }
}
