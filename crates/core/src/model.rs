/// The function a solver drives toward a root.
///
/// A model is called once per sample. Solvers never inspect it beyond
/// [`call`](Model::call): the input comes from an
/// [`EquationProblem`](crate::EquationProblem), and the output is handed back
/// to the same problem to compute a residual. Most callers wrap a plain
/// closure with [`Function`](crate::Function) or
/// [`FallibleFunction`](crate::FallibleFunction) rather than implementing this
/// trait.
///
/// # Example
///
/// ```
/// use std::convert::Infallible;
///
/// use rootline_core::Model;
///
/// /// Volume of a cube with the given side.
/// struct Cube;
///
/// impl Model for Cube {
///     type Input = f64;
///     type Output = f64;
///     type Error = Infallible;
///
///     fn call(&self, side: &f64) -> Result<f64, Infallible> {
///         Ok(side.powi(3))
///     }
/// }
///
/// assert_eq!(Cube.call(&2.0), Ok(8.0));
/// ```
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the model with the given input.
    ///
    /// # Errors
    ///
    /// Returns an error if the model cannot produce an output for `input`,
    /// such as an argument outside its domain.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

/// The input and output of the model call behind a solver's latest iterate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<I, O> {
    pub input: I,
    pub output: O,
}

impl<I, O> Snapshot<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}
