use crate::equation::Evaluation;

/// A sample point `(x, f(x))` recorded during a secant run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Iterate {
    /// The evaluated x value.
    pub x: f64,

    /// The residual at `x`.
    pub y: f64,
}

impl Iterate {
    /// Creates a new iterate.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns a copy with both coordinates rounded to `decimals` places.
    ///
    /// Rounding is for listings and display only; the solver never compares
    /// rounded values.
    #[must_use]
    pub fn rounded(self, decimals: i32) -> Self {
        Self {
            x: round_to(self.x, decimals),
            y: round_to(self.y, decimals),
        }
    }
}

impl<I, O> From<&Evaluation<I, O>> for Iterate {
    fn from(eval: &Evaluation<I, O>) -> Self {
        Self::new(eval.x, eval.residual)
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10_f64.powi(decimals);
    let scaled = value * scale;
    if scaled.is_finite() {
        scaled.round() / scale
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn rounds_both_coordinates() {
        let point = Iterate::new(1.414_213_56, -0.000_046_2).rounded(4);
        assert_relative_eq!(point.x, 1.4142);
        assert_relative_eq!(point.y, 0.0);
    }

    #[test]
    fn rounding_keeps_huge_and_non_finite_values() {
        let point = Iterate::new(1e306, f64::INFINITY).rounded(4);
        assert_relative_eq!(point.x, 1e306);
        assert!(point.y.is_infinite());
    }
}
