use rootline_solvers::equation::secant::Trajectory;

/// A playback position over a trajectory's segments.
///
/// Step `k` shows the segment from point `k` to point `k + 1`, so the cursor
/// stays within `0..=len - 2`. The cursor only holds indices; it never
/// borrows or changes the trajectory it was made for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepCursor {
    step: usize,
    last: usize,
}

impl StepCursor {
    /// Creates a cursor at the first step of `trajectory`.
    #[must_use]
    pub fn new(trajectory: &Trajectory) -> Self {
        Self {
            step: 0,
            last: trajectory.steps() - 1,
        }
    }

    /// Returns the current step.
    #[must_use]
    pub fn read(&self) -> usize {
        self.step
    }

    /// Returns the final step.
    #[must_use]
    pub fn last(&self) -> usize {
        self.last
    }

    /// Returns true if the cursor is at the final step.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.step == self.last
    }

    /// Moves back to the first step.
    pub fn reset(&mut self) {
        self.step = 0;
    }

    /// Moves to the final step.
    pub fn fast_forward(&mut self) {
        self.step = self.last;
    }

    /// Moves one step forward. Returns false at the final step.
    pub fn advance(&mut self) -> bool {
        if self.step < self.last {
            self.step += 1;
            true
        } else {
            false
        }
    }

    /// Moves one step back. Returns false at the first step.
    pub fn retreat(&mut self) -> bool {
        if self.step > 0 {
            self.step -= 1;
            true
        } else {
            false
        }
    }
}
