use std::error::Error as StdError;

use thiserror::Error;

use crate::equation::EvalError;

/// Errors that abort a secant run.
///
/// Convergence problems (a vanishing denominator, divergence, the iteration
/// cap) are not errors; they end the run with a [`Status`](super::Status).
#[derive(Debug, Error)]
pub enum Error {
    #[error("model call failed")]
    Model(#[source] Box<dyn StdError + Send + Sync>),

    #[error("problem error")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),

    #[error("residual is not a number at x = {x}")]
    NanResidual { x: f64 },
}

impl<ME, PE> From<EvalError<ME, PE>> for Error
where
    ME: StdError + Send + Sync + 'static,
    PE: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<ME, PE>) -> Self {
        match err {
            EvalError::Model(e) => Self::Model(Box::new(e)),
            EvalError::Problem(e) => Self::Problem(Box::new(e)),
        }
    }
}
