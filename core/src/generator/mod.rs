use std::collections::BTreeSet;
use serde::{Deserialize, Serialize};

use crate::*;
pub use random::*;

mod random;

/// Final set of mine positions for a board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MineLayout {
    dimensions: Coords,
    mines: BTreeSet<Coords>,
}

impl MineLayout {
    /// Explicit layout, duplicate points collapse into one mine.
    pub fn from_points<I>(dimensions: &[Coord], points: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<[Coord]>,
    {
        let mut mines = BTreeSet::new();
        for point in points {
            let point = point.as_ref();
            if !in_bounds(dimensions, point) {
                return Err(GameError::InvalidCoords);
            }
            mines.insert(Coords::from_slice(point));
        }

        Ok(Self {
            dimensions: Coords::from_slice(dimensions),
            mines,
        })
    }

    pub fn dimensions(&self) -> &[Coord] {
        &self.dimensions
    }

    pub fn mine_count(&self) -> usize {
        self.mines.len()
    }

    pub fn contains(&self, point: &[Coord]) -> bool {
        self.mines.contains(point)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coords> {
        self.mines.iter()
    }

    pub fn adjacent_mine_count(&self, point: &[Coord]) -> usize {
        NeighborIter::new(point, &self.dimensions)
            .filter(|neighbor| self.mines.contains(neighbor))
            .count()
    }
}

/// Mine placement happens once, either at construction or on the first reveal.
///
/// Valid transitions:
/// - Pending -> Placed
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MinePhase {
    /// Only the number of mines is known, positions are chosen on the first reveal.
    Pending { mine_count: usize },
    Placed(MineLayout),
}

impl MinePhase {
    pub fn mine_count(&self) -> usize {
        match self {
            Self::Pending { mine_count } => *mine_count,
            Self::Placed(layout) => layout.mine_count(),
        }
    }

    pub const fn is_placed(&self) -> bool {
        matches!(self, Self::Placed(_))
    }

    pub const fn layout(&self) -> Option<&MineLayout> {
        match self {
            Self::Pending { .. } => None,
            Self::Placed(layout) => Some(layout),
        }
    }
}
