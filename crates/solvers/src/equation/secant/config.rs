use thiserror::Error;

use super::Degeneracy;

/// Configuration for the secant solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    residual_tol: f64,
    x_tol: f64,
    degeneracy: Degeneracy,
}

/// Errors that can occur when validating a secant solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_iters must be at least 2")]
    MaxIters,

    #[error("residual_tol must be finite and non-negative")]
    Residual,

    #[error("x_tol must be finite and non-negative")]
    X,

    #[error("perturbation must be finite and positive")]
    Perturbation,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(
            Self::DEFAULT_MAX_ITERS,
            Self::DEFAULT_RESIDUAL_TOL,
            Self::DEFAULT_X_TOL,
        )
        .unwrap()
    }
}

impl Config {
    pub const DEFAULT_MAX_ITERS: usize = 1000;
    pub const DEFAULT_RESIDUAL_TOL: f64 = 1e-7;
    pub const DEFAULT_X_TOL: f64 = 1e-28;

    /// Creates a new config with validated limits and the
    /// [`Degeneracy::Stop`] policy.
    ///
    /// `max_iters` bounds the number of iterates recorded after the initial
    /// point, so the second guess counts as the first and at least one secant
    /// update always runs.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters < 2` or any tolerance is negative or
    /// non-finite.
    pub fn new(max_iters: usize, residual_tol: f64, x_tol: f64) -> Result<Self, ConfigError> {
        if max_iters < 2 {
            return Err(ConfigError::MaxIters);
        }
        if !residual_tol.is_finite() || residual_tol < 0.0 {
            return Err(ConfigError::Residual);
        }
        if !x_tol.is_finite() || x_tol < 0.0 {
            return Err(ConfigError::X);
        }

        Ok(Self {
            max_iters,
            residual_tol,
            x_tol,
            degeneracy: Degeneracy::Stop,
        })
    }

    /// Returns a copy using the given degeneracy policy.
    ///
    /// # Errors
    ///
    /// Returns an error if a [`Degeneracy::Perturb`] value is not finite and
    /// positive.
    pub fn with_degeneracy(self, degeneracy: Degeneracy) -> Result<Self, ConfigError> {
        if let Degeneracy::Perturb(epsilon) = degeneracy
            && (!epsilon.is_finite() || epsilon <= 0.0)
        {
            return Err(ConfigError::Perturbation);
        }

        Ok(Self { degeneracy, ..self })
    }

    /// Returns the maximum number of iterates after the initial point.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the residual magnitude below which the solver has converged.
    #[must_use]
    pub fn residual_tol(&self) -> f64 {
        self.residual_tol
    }

    /// Returns the iterate spacing below which the solver has converged.
    #[must_use]
    pub fn x_tol(&self) -> f64 {
        self.x_tol
    }

    /// Returns the policy for a vanishing secant denominator.
    #[must_use]
    pub fn degeneracy(&self) -> Degeneracy {
        self.degeneracy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_documented_limits() {
        let config = Config::default();
        assert_eq!(config.max_iters(), 1000);
        assert_eq!(config.residual_tol(), 1e-7);
        assert_eq!(config.x_tol(), 1e-28);
        assert_eq!(config.degeneracy(), Degeneracy::Stop);
    }

    #[test]
    fn rejects_invalid_values() {
        assert_eq!(Config::new(1, 1e-7, 0.0), Err(ConfigError::MaxIters));
        assert_eq!(Config::new(10, -1.0, 0.0), Err(ConfigError::Residual));
        assert_eq!(Config::new(10, f64::NAN, 0.0), Err(ConfigError::Residual));
        assert_eq!(Config::new(10, 0.0, f64::INFINITY), Err(ConfigError::X));
    }

    #[test]
    fn perturbation_must_be_positive() {
        let config = Config::default();
        assert_eq!(
            config.with_degeneracy(Degeneracy::Perturb(0.0)),
            Err(ConfigError::Perturbation)
        );
        assert_eq!(
            config.with_degeneracy(Degeneracy::Perturb(f64::NAN)),
            Err(ConfigError::Perturbation)
        );

        let perturbed = config
            .with_degeneracy(Degeneracy::perturb())
            .expect("valid perturbation");
        assert_eq!(perturbed.degeneracy(), Degeneracy::Perturb(1e-5));
        assert_eq!(perturbed.max_iters(), config.max_iters());
    }
}
