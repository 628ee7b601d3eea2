use rand::Rng;
use thiserror::Error;

/// Errors that can occur when creating [`Guesses`] or a [`GuessRange`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    /// One or both guesses are non-finite.
    #[error("non-finite guess(es)")]
    NonFinite,

    /// Both guesses are the same value.
    #[error("guesses must be distinct")]
    Identical,

    /// Range bounds are non-finite or not strictly increasing.
    #[error("range must be finite with low < high")]
    InvalidRange,
}

/// The two starting points of a secant run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Guesses {
    x0: f64,
    x1: f64,
}

impl Guesses {
    /// Creates validated guesses.
    ///
    /// No relation between `f(x0)` and `f(x1)` is required; equal values are
    /// handled during iteration by the configured [`Degeneracy`](super::Degeneracy).
    ///
    /// # Errors
    ///
    /// Returns an error if either guess is non-finite or both are equal.
    pub fn new(x0: f64, x1: f64) -> Result<Self, GuessError> {
        if !x0.is_finite() || !x1.is_finite() {
            return Err(GuessError::NonFinite);
        }

        #[allow(clippy::float_cmp)]
        if x0 == x1 {
            return Err(GuessError::Identical);
        }

        Ok(Self { x0, x1 })
    }

    /// Draws two distinct guesses independently and uniformly from `range`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, range: GuessRange) -> Self {
        let x0 = range.sample(rng);
        let x1 = (0..GuessRange::MAX_REDRAWS)
            .map(|_| range.sample(rng))
            .find(|&x| x != x0)
            // The upper bound is excluded from sampling, so it differs from x0.
            .unwrap_or(range.high);

        Self { x0, x1 }
    }

    /// Returns the first guess.
    #[must_use]
    pub fn x0(&self) -> f64 {
        self.x0
    }

    /// Returns the second guess.
    #[must_use]
    pub fn x1(&self) -> f64 {
        self.x1
    }

    /// Returns both guesses as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.x0, self.x1]
    }
}

/// Half-open interval `[low, high)` that random guesses are drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessRange {
    low: f64,
    high: f64,
}

impl Default for GuessRange {
    fn default() -> Self {
        Self {
            low: -5.0,
            high: 5.0,
        }
    }
}

impl GuessRange {
    const MAX_REDRAWS: usize = 16;

    /// Creates a validated range.
    ///
    /// # Errors
    ///
    /// Returns `GuessError::InvalidRange` unless both bounds are finite and
    /// `low < high`.
    pub fn new(low: f64, high: f64) -> Result<Self, GuessError> {
        if !low.is_finite() || !high.is_finite() || low >= high {
            return Err(GuessError::InvalidRange);
        }
        Ok(Self { low, high })
    }

    /// Returns the bounds as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.low, self.high]
    }

    /// Returns true if `x` can be drawn from this range or is its upper bound.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        (self.low..=self.high).contains(&x)
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        rng.random_range(self.low..self.high)
    }
}
