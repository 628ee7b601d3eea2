use rand::Rng;
use rootline_core::{Model, Observer, RootProblem};

use super::{Action, Config, Error, Event, GuessRange, Guesses, Solution, solve};

/// One secant run over a real function, from construction to result.
///
/// A solver borrows its function, starts from fresh random guesses, and is
/// consumed by [`start`](Self::start), so every run needs a new instance and
/// results only exist once the run has finished.
///
/// # Example
///
/// ```
/// use rootline_core::Function;
/// use rootline_solvers::equation::secant::{Guesses, SecantSolver, Status};
///
/// let f = Function::new(|x: f64| x * x - 2.0);
/// let guesses = Guesses::new(1.0, 2.0)?;
///
/// let solution = SecantSolver::new(&f).with_guesses(guesses).start()?;
///
/// assert_eq!(solution.status, Status::Converged);
/// assert!((solution.root() - 2.0_f64.sqrt()).abs() < 1e-7);
/// assert_eq!(solution.trajectory().last().x, solution.root());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct SecantSolver<'f, M> {
    model: &'f M,
    guesses: Guesses,
    config: Config,
}

impl<'f, M> SecantSolver<'f, M>
where
    M: Model<Input = f64, Output = f64>,
{
    /// Creates a solver with guesses drawn from the thread-local RNG over the
    /// default [`GuessRange`], and the default [`Config`].
    ///
    /// The function is not evaluated until [`start`](Self::start).
    pub fn new(model: &'f M) -> Self {
        Self::with_rng(model, &mut rand::rng())
    }

    /// Creates a solver with guesses drawn from `rng` over the default
    /// [`GuessRange`].
    ///
    /// Pass a seeded RNG for reproducible trajectories.
    pub fn with_rng<R: Rng + ?Sized>(model: &'f M, rng: &mut R) -> Self {
        Self {
            model,
            guesses: Guesses::random(rng, GuessRange::default()),
            config: Config::default(),
        }
    }

    /// Replaces the initial guesses.
    #[must_use]
    pub fn with_guesses(self, guesses: Guesses) -> Self {
        Self { guesses, ..self }
    }

    /// Replaces the solver config.
    #[must_use]
    pub fn with_config(self, config: Config) -> Self {
        Self { config, ..self }
    }

    /// Returns the initial guesses this run will start from.
    #[must_use]
    pub fn guesses(&self) -> Guesses {
        self.guesses
    }

    /// Returns the solver config.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs the iteration to completion.
    ///
    /// # Errors
    ///
    /// Returns an error if the function fails or yields `NaN`.
    pub fn start(self) -> Result<Solution<f64, f64>, Error> {
        self.start_observed(())
    }

    /// Runs the iteration to completion, reporting each update to `observer`.
    ///
    /// # Errors
    ///
    /// Returns an error if the function fails or yields `NaN` and the
    /// observer does not stop the run.
    pub fn start_observed<Obs>(self, observer: Obs) -> Result<Solution<f64, f64>, Error>
    where
        Obs: for<'a> Observer<Event<'a, M, RootProblem>, Action>,
    {
        solve(self.model, &RootProblem, self.guesses, &self.config, observer)
    }
}
