use std::ops::Index;

use super::Iterate;

/// The ordered record of every iterate produced by one secant run.
///
/// A trajectory always holds at least two points: the two initial guesses.
/// Points are only ever appended, in the order the solver produced them,
/// and the last point is the reported root estimate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Trajectory {
    points: Vec<Iterate>,
}

impl Trajectory {
    /// Starts a trajectory from the two initial guesses.
    pub(super) fn new(first: Iterate, second: Iterate) -> Self {
        Self {
            points: vec![first, second],
        }
    }

    /// Appends the next iterate.
    pub(super) fn push(&mut self, point: Iterate) {
        self.points.push(point);
    }

    /// Returns the number of recorded points (always at least two).
    #[allow(clippy::len_without_is_empty)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns the number of segments between consecutive points.
    ///
    /// This is also the number of iterates recorded after the initial point.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.points.len() - 1
    }

    /// Returns the point at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Iterate> {
        self.points.get(index).copied()
    }

    /// Returns the first initial guess.
    #[must_use]
    pub fn first(&self) -> Iterate {
        self.points[0]
    }

    /// Returns the most recent point, which is the root estimate.
    #[must_use]
    pub fn last(&self) -> Iterate {
        self.points[self.points.len() - 1]
    }

    /// Returns all points in chronological order.
    #[must_use]
    pub fn as_slice(&self) -> &[Iterate] {
        &self.points
    }

    /// Iterates over the points in chronological order.
    pub fn iter(&self) -> std::slice::Iter<'_, Iterate> {
        self.points.iter()
    }

    /// Returns every point rounded to `decimals` places.
    #[must_use]
    pub fn rounded(&self, decimals: i32) -> Vec<Iterate> {
        self.points.iter().map(|p| p.rounded(decimals)).collect()
    }
}

impl Index<usize> for Trajectory {
    type Output = Iterate;

    fn index(&self, index: usize) -> &Iterate {
        &self.points[index]
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Iterate;
    type IntoIter = std::slice::Iter<'a, Iterate>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Trajectory {
        let mut trajectory = Trajectory::new(Iterate::new(1.0, -1.0), Iterate::new(2.0, 2.0));
        trajectory.push(Iterate::new(1.333_33, -0.222_22));
        trajectory
    }

    #[test]
    fn starts_with_both_guesses() {
        let trajectory = Trajectory::new(Iterate::new(0.0, 1.0), Iterate::new(1.0, 2.0));
        assert_eq!(trajectory.len(), 2);
        assert_eq!(trajectory.steps(), 1);
        assert_eq!(trajectory.first(), Iterate::new(0.0, 1.0));
        assert_eq!(trajectory.last(), Iterate::new(1.0, 2.0));
    }

    #[test]
    fn appends_in_order() {
        let trajectory = sample();
        let xs: Vec<f64> = trajectory.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![1.0, 2.0, 1.333_33]);
        assert_eq!(trajectory[2], trajectory.last());
        assert_eq!(trajectory.get(3), None);
    }

    #[test]
    fn rounded_view_leaves_points_untouched() {
        let trajectory = sample();
        let rounded = trajectory.rounded(2);
        assert_eq!(rounded[2], Iterate::new(1.33, -0.22));
        assert_eq!(trajectory[2], Iterate::new(1.333_33, -0.222_22));
    }
}
