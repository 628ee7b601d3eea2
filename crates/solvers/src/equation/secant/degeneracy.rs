/// Policy for a zero denominator in a secant quotient.
///
/// The same policy applies wherever a secant is formed from two samples: the
/// solver's update (`f(b) - f(a)` vanishes) and line reconstruction during
/// replay (`b.x - a.x` vanishes).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Degeneracy {
    /// Give up on the quotient; the solver stops with
    /// [`Status::Degenerate`](super::Status::Degenerate).
    #[default]
    Stop,

    /// Add this value to the zero denominator and carry on.
    Perturb(f64),
}

impl Degeneracy {
    /// Perturbation used by [`Degeneracy::perturb`].
    pub const DEFAULT_PERTURBATION: f64 = 1e-5;

    /// Perturbs zero denominators by [`Self::DEFAULT_PERTURBATION`].
    #[must_use]
    pub fn perturb() -> Self {
        Self::Perturb(Self::DEFAULT_PERTURBATION)
    }

    /// Divides `numerator` by `denominator`, applying the policy when the
    /// denominator is exactly zero.
    ///
    /// Returns `None` only for [`Degeneracy::Stop`] with a zero denominator.
    #[must_use]
    pub fn quotient(self, numerator: f64, denominator: f64) -> Option<f64> {
        #[allow(clippy::float_cmp)]
        if denominator != 0.0 {
            return Some(numerator / denominator);
        }

        match self {
            Self::Stop => None,
            Self::Perturb(epsilon) => Some(numerator / (denominator + epsilon)),
        }
    }
}
