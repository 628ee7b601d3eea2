use rootline_solvers::equation::secant::{Degeneracy, Iterate, Trajectory};

use crate::SecantLine;

/// What playback shows at one step of a trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// The step this frame was built for.
    pub step: usize,

    /// Points `step` and `step + 1`.
    pub segment: [Iterate; 2],

    /// Points `step + 1` and `step + 2`, absent at the final step.
    pub next_segment: Option<[Iterate; 2]>,

    /// The secant line through `segment`.
    pub line: SecantLine,

    /// Where the next iterate lands: `x` of point `step + 2`, or of the
    /// final point at the last step.
    pub marker_x: f64,
}

impl Frame {
    /// Builds the frame for `step`, or `None` if `step > len - 2`.
    ///
    /// Frames are pure reads of the trajectory, so the same step always
    /// yields the same frame.
    #[must_use]
    pub fn at(trajectory: &Trajectory, step: usize, degeneracy: Degeneracy) -> Option<Self> {
        let start = trajectory.get(step)?;
        let end = trajectory.get(step + 1)?;
        let next = trajectory.get(step + 2);

        Some(Self {
            step,
            segment: [start, end],
            next_segment: next.map(|after| [end, after]),
            line: SecantLine::through(start, end, degeneracy),
            marker_x: next.map_or(end.x, |after| after.x),
        })
    }
}
