use ndarray::{ArrayD, IxDyn};

use crate::*;

/// N-dimensional array of cells addressed by [`Coords`].
///
/// Indexing with a point outside the grid panics; use [`Grid::validate`] first for untrusted input.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    cells: ArrayD<T>,
}

impl<T: Default> Grid<T> {
    pub fn new(dimensions: &[Coord]) -> Self {
        Self {
            cells: ArrayD::default(IxDyn(dimensions)),
        }
    }
}

impl<T> Grid<T> {
    pub fn dimensions(&self) -> &[Coord] {
        self.cells.shape()
    }

    pub fn total_len(&self) -> usize {
        self.cells.len()
    }

    pub fn contains(&self, point: &[Coord]) -> bool {
        in_bounds(self.dimensions(), point)
    }

    pub fn validate(&self, point: &[Coord]) -> Result<()> {
        if self.contains(point) {
            Ok(())
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn get(&self, point: &[Coord]) -> &T {
        &self.cells[point]
    }

    pub fn get_mut(&mut self, point: &[Coord]) -> &mut T {
        &mut self.cells[point]
    }

    pub fn all_points(&self) -> PointIter {
        PointIter::over(self.dimensions())
    }

    pub fn neighbors(&self, point: &[Coord]) -> NeighborIter {
        NeighborIter::new(point, self.dimensions())
    }
}
