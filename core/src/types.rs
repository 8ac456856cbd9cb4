use smallvec::{SmallVec, smallvec};

/// Single coordinate axis, used for board sizes and positions.
pub type Coord = usize;

/// Owned point on the board, one component per dimension.
pub type Coords = SmallVec<[Coord; 4]>;

/// Whether `point` has the same arity as `dimensions` and every component is in range.
pub fn in_bounds(dimensions: &[Coord], point: &[Coord]) -> bool {
    point.len() == dimensions.len() && point.iter().zip(dimensions).all(|(c, size)| c < size)
}

/// Number of squares on a board with the given dimensions, `None` on overflow.
pub fn total_squares(dimensions: &[Coord]) -> Option<usize> {
    dimensions.iter().try_fold(1usize, |acc, &size| acc.checked_mul(size))
}

/// Lazy iterator over every point of an axis-aligned box, row-major order (last axis varies
/// fastest).
#[derive(Clone, Debug)]
pub struct PointIter {
    lower: Coords,
    upper: Coords,
    next: Option<Coords>,
}

impl PointIter {
    /// Box spanning `lower` (inclusive) to `upper` (exclusive) on every axis.
    pub fn new(lower: Coords, upper: Coords) -> Self {
        debug_assert_eq!(lower.len(), upper.len());
        let empty = lower.iter().zip(&upper).any(|(lo, hi)| lo >= hi);
        let next = (!empty).then(|| lower.clone());
        Self { lower, upper, next }
    }

    /// Every point of a board with the given dimensions.
    pub fn over(dimensions: &[Coord]) -> Self {
        Self::new(smallvec![0; dimensions.len()], Coords::from_slice(dimensions))
    }
}

impl Iterator for PointIter {
    type Item = Coords;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;

        let mut following = current.clone();
        for axis in (0..following.len()).rev() {
            following[axis] += 1;
            if following[axis] < self.upper[axis] {
                self.next = Some(following);
                return Some(current);
            }
            following[axis] = self.lower[axis];
        }

        // every axis wrapped, this was the last point
        Some(current)
    }
}

/// Points within Chebyshev distance 1 of a center, clipped to the board, center excluded.
#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: Coords,
    points: PointIter,
}

impl NeighborIter {
    pub fn new(center: &[Coord], bounds: &[Coord]) -> Self {
        let lower = center.iter().map(|&c| c.saturating_sub(1)).collect();
        let upper = center
            .iter()
            .zip(bounds)
            .map(|(&c, &size)| c.saturating_add(2).min(size))
            .collect();
        Self {
            center: Coords::from_slice(center),
            points: PointIter::new(lower, upper),
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coords;

    fn next(&mut self) -> Option<Self::Item> {
        let center = &self.center;
        self.points.by_ref().find(|point| point != center)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(iter: impl Iterator<Item = Coords>) -> Vec<Vec<Coord>> {
        iter.map(|point| point.to_vec()).collect()
    }

    #[test]
    fn point_iter_is_row_major() {
        let points = collect(PointIter::over(&[2, 3]));

        assert_eq!(
            points,
            vec![
                vec![0, 0],
                vec![0, 1],
                vec![0, 2],
                vec![1, 0],
                vec![1, 1],
                vec![1, 2],
            ]
        );
    }

    #[test]
    fn point_iter_restarts_fresh() {
        let first = collect(PointIter::over(&[2, 2, 2]));
        let second = collect(PointIter::over(&[2, 2, 2]));

        assert_eq!(first.len(), 8);
        assert_eq!(first, second);
    }

    #[test]
    fn neighbors_in_corner_are_clipped() {
        let neighbors = collect(NeighborIter::new(&[0, 0], &[3, 3]));

        assert_eq!(neighbors, vec![vec![0, 1], vec![1, 0], vec![1, 1]]);
    }

    #[test]
    fn neighbors_in_center_include_diagonals() {
        let neighbors = collect(NeighborIter::new(&[1, 1], &[3, 3]));

        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&vec![1, 1]));
    }

    #[test]
    fn neighbors_generalize_to_three_dimensions() {
        assert_eq!(NeighborIter::new(&[1, 1, 1], &[3, 3, 3]).count(), 26);
        assert_eq!(NeighborIter::new(&[0, 0, 0], &[3, 3, 3]).count(), 7);
    }

    #[test]
    fn neighbors_on_a_line() {
        let neighbors = collect(NeighborIter::new(&[4], &[5]));

        assert_eq!(neighbors, vec![vec![3]]);
    }

    #[test]
    fn bounds_check_requires_matching_arity() {
        assert!(in_bounds(&[3, 3], &[2, 2]));
        assert!(!in_bounds(&[3, 3], &[3, 0]));
        assert!(!in_bounds(&[3, 3], &[1]));
        assert_eq!(total_squares(&[4, 5, 6]), Some(120));
        assert_eq!(total_squares(&[usize::MAX, 2]), None);
    }
}
