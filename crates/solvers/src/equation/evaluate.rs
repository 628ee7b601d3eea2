use thiserror::Error;

use rootline_core::{EquationProblem, Model, Snapshot};

/// One sample of a single-variable equation: `x`, its residual, and the
/// model call that produced it.
///
/// The secant solver turns each of these into a recorded
/// [`Iterate`](super::secant::Iterate) and keeps the snapshot of the latest.
#[derive(Debug, Clone)]
pub struct Evaluation<I, O> {
    pub x: f64,
    pub residual: f64,
    pub snapshot: Snapshot<I, O>,
}

/// Errors that can occur when sampling an equation.
#[derive(Debug, Error)]
pub enum EvalError<ME, PE> {
    /// The model call failed.
    #[error("model call failed")]
    Model(#[source] ME),
    /// Failed to construct input or compute the residual.
    #[error("problem error")]
    Problem(#[source] PE),
}

/// Type alias for the result of [`evaluate`].
pub type EvaluateResult<M, P> = Result<
    Evaluation<<M as Model>::Input, <M as Model>::Output>,
    EvalError<<M as Model>::Error, <P as EquationProblem<1>>::Error>,
>;

/// Samples the equation at `x`.
///
/// The problem maps `x` to a model input, the model is called once, and the
/// problem turns input and output into the residual. A non-finite residual is
/// returned as is; rejecting `NaN` is up to the caller.
///
/// # Errors
///
/// Returns an error if input mapping, the model call, or the residual fails.
pub fn evaluate<M, P>(model: &M, problem: &P, x: f64) -> EvaluateResult<M, P>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    let input = problem.input(&[x]).map_err(EvalError::Problem)?;
    let output = model.call(&input).map_err(EvalError::Model)?;
    let [residual] = problem
        .residuals(&input, &output)
        .map_err(EvalError::Problem)?;

    Ok(Evaluation {
        x,
        residual,
        snapshot: Snapshot::new(input, output),
    })
}
