//! Step-by-step playback of secant trajectories.
//!
//! A finished [`Trajectory`] is immutable; playback is reconstructed from it
//! after the run rather than by pausing the solver. This crate provides the
//! pieces a renderer needs and nothing it draws:
//!
//! - [`StepCursor`] — a bounded position over the trajectory's segments
//! - [`SecantLine`] — the line through two recorded iterates
//! - [`Frame`] — everything shown at one step: the current and next
//!   segments, the secant line, and where the next iterate lands
//!
//! [`Trajectory`]: rootline_solvers::equation::secant::Trajectory

mod cursor;
mod frame;
mod line;

pub use cursor::StepCursor;
pub use frame::Frame;
pub use line::SecantLine;
