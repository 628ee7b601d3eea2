/// Actions an observer can take during a secant run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the trajectory recorded so far.
    ///
    /// Returned from a failure event, this recovers from the failure instead
    /// of propagating it.
    StopEarly,
}
