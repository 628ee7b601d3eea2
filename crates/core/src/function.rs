//! Adapters from plain real functions to [`Model`] and [`EquationProblem`].

use std::convert::Infallible;

use crate::{EquationProblem, Model};

/// A model backed by an infallible `f64 -> f64` function.
///
/// # Example
///
/// ```
/// use rootline_core::{Function, Model};
///
/// let f = Function::new(|x: f64| x * x - 2.0);
/// assert_eq!(f.call(&2.0), Ok(2.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Function<F> {
    function: F,
}

impl<F> Function<F>
where
    F: Fn(f64) -> f64,
{
    /// Wraps a function.
    pub const fn new(function: F) -> Self {
        Self { function }
    }
}

impl<F> Model for Function<F>
where
    F: Fn(f64) -> f64,
{
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &f64) -> Result<f64, Self::Error> {
        Ok((self.function)(*input))
    }
}

impl<F> From<F> for Function<F>
where
    F: Fn(f64) -> f64,
{
    fn from(function: F) -> Self {
        Self::new(function)
    }
}

/// A model backed by a function that may reject its argument.
///
/// Use this for functions with a restricted domain, such as a logarithm,
/// where evaluation outside the domain must surface as an error rather
/// than a substitute value.
#[derive(Debug, Clone, Copy)]
pub struct FallibleFunction<F> {
    function: F,
}

impl<F, E> FallibleFunction<F>
where
    F: Fn(f64) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    /// Wraps a fallible function.
    pub const fn new(function: F) -> Self {
        Self { function }
    }
}

impl<F, E> Model for FallibleFunction<F>
where
    F: Fn(f64) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Input = f64;
    type Output = f64;
    type Error = E;

    fn call(&self, input: &f64) -> Result<f64, E> {
        (self.function)(*input)
    }
}

/// Scalar root-finding problem: the residual is the model output itself.
///
/// Pairs with [`Function`] or [`FallibleFunction`] to find `x` such that
/// `f(x) = 0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RootProblem;

impl EquationProblem<1> for RootProblem {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        Ok(x[0])
    }

    fn residuals(&self, _input: &f64, output: &f64) -> Result<[f64; 1], Self::Error> {
        Ok([*output])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fmt;

    #[derive(Debug, PartialEq)]
    struct Domain(f64);

    impl fmt::Display for Domain {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{} is outside the domain", self.0)
        }
    }

    impl std::error::Error for Domain {}

    #[test]
    fn function_calls_closure() {
        let f = Function::new(|x: f64| 3.0 * x + 1.0);
        assert_eq!(f.call(&2.0), Ok(7.0));
    }

    #[test]
    fn fallible_function_propagates_errors() {
        let ln = FallibleFunction::new(|x: f64| if x > 0.0 { Ok(x.ln()) } else { Err(Domain(x)) });

        assert_eq!(ln.call(&1.0), Ok(0.0));
        assert_eq!(ln.call(&-1.0), Err(Domain(-1.0)));
    }

    #[test]
    fn root_problem_uses_output_as_residual() {
        let problem = RootProblem;
        let input = problem.input(&[4.5]).unwrap();
        assert_eq!(input, 4.5);
        assert_eq!(problem.residuals(&input, &-0.25).unwrap(), [-0.25]);
    }
}
