use rootline_solvers::equation::secant::{Degeneracy, Iterate};

/// The straight line through two recorded iterates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SecantLine {
    /// `y = slope * (x - anchor.x) + anchor.y`.
    Sloped { slope: f64, anchor: Iterate },

    /// Both iterates share an x value and the policy refused to perturb it.
    Vertical { x: f64 },
}

impl SecantLine {
    /// Builds the line from `a` to `b`.
    ///
    /// A zero run (`a.x == b.x`) is resolved with the same [`Degeneracy`]
    /// policy the solver applies to a zero rise.
    #[must_use]
    pub fn through(a: Iterate, b: Iterate, degeneracy: Degeneracy) -> Self {
        match degeneracy.quotient(b.y - a.y, b.x - a.x) {
            Some(slope) => Self::Sloped { slope, anchor: a },
            None => Self::Vertical { x: a.x },
        }
    }

    /// Returns the slope, or `None` for a vertical line.
    #[must_use]
    pub fn slope(&self) -> Option<f64> {
        match self {
            Self::Sloped { slope, .. } => Some(*slope),
            Self::Vertical { .. } => None,
        }
    }

    /// Returns `y` at `x`, or `None` for a vertical line.
    #[must_use]
    pub fn eval(&self, x: f64) -> Option<f64> {
        match self {
            Self::Sloped { slope, anchor } => Some(slope * (x - anchor.x) + anchor.y),
            Self::Vertical { .. } => None,
        }
    }

    /// Returns where the line crosses `y = 0`.
    ///
    /// A vertical line crosses at its own x. A flat line off the axis never
    /// crosses and returns `None`.
    #[must_use]
    pub fn x_intercept(&self) -> Option<f64> {
        match self {
            #[allow(clippy::float_cmp)]
            Self::Sloped { slope, anchor } if *slope == 0.0 => {
                (anchor.y == 0.0).then_some(anchor.x)
            }
            Self::Sloped { slope, anchor } => Some(anchor.x - anchor.y / slope),
            Self::Vertical { x } => Some(*x),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn line_through_two_points() {
        let line = SecantLine::through(
            Iterate::new(1.0, -1.0),
            Iterate::new(2.0, 2.0),
            Degeneracy::Stop,
        );

        assert_eq!(line.slope(), Some(3.0));
        assert_relative_eq!(line.eval(2.0).expect("sloped"), 2.0);
        assert_relative_eq!(line.x_intercept().expect("crosses"), 4.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn zero_run_follows_the_policy() {
        let a = Iterate::new(1.5, 0.25);
        let b = Iterate::new(1.5, 0.5);

        let stopped = SecantLine::through(a, b, Degeneracy::Stop);
        assert_eq!(stopped, SecantLine::Vertical { x: 1.5 });
        assert_eq!(stopped.eval(1.5), None);
        assert_eq!(stopped.x_intercept(), Some(1.5));

        let perturbed = SecantLine::through(a, b, Degeneracy::perturb());
        assert_relative_eq!(perturbed.slope().expect("sloped"), 0.25 / 1e-5);
    }

    #[test]
    fn flat_line_has_no_intercept() {
        let line = SecantLine::through(
            Iterate::new(0.0, 2.0),
            Iterate::new(1.0, 2.0),
            Degeneracy::Stop,
        );
        assert_eq!(line.slope(), Some(0.0));
        assert_eq!(line.x_intercept(), None);
    }
}
