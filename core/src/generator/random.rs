use rand::prelude::*;
use std::collections::BTreeSet;

use super::*;

/// Uniformly random point on a board with the given dimensions.
pub fn random_point<R: Rng + ?Sized>(dimensions: &[Coord], rng: &mut R) -> Coords {
    dimensions
        .iter()
        .map(|&size| rng.random_range(0..size))
        .collect()
}

impl MineLayout {
    /// Random layout that keeps `first_move` and its neighbors free of mines.
    ///
    /// When the neighborhood is too large to leave room for `mine_count` mines only `first_move`
    /// itself is kept free, which always fits because `mine_count` is below the square count.
    pub fn generate<R: Rng + ?Sized>(
        dimensions: &[Coord],
        mine_count: usize,
        first_move: &[Coord],
        rng: &mut R,
    ) -> Result<Self> {
        if !in_bounds(dimensions, first_move) {
            return Err(GameError::InvalidCoords);
        }
        let total = total_squares(dimensions).ok_or(GameError::InvalidDimensions)?;
        if mine_count >= total {
            return Err(GameError::TooManyMines);
        }

        let mut freebies: BTreeSet<Coords> = NeighborIter::new(first_move, dimensions).collect();
        freebies.insert(Coords::from_slice(first_move));
        if total - freebies.len() < mine_count {
            log::warn!(
                "Cannot keep {} squares around {:?} free with {} mines, only the first move stays safe",
                freebies.len(),
                first_move,
                mine_count
            );
            freebies.clear();
            freebies.insert(Coords::from_slice(first_move));
        }

        let mut mines = BTreeSet::new();
        while mines.len() < mine_count {
            let candidate = random_point(dimensions, rng);
            if !freebies.contains(&candidate) {
                mines.insert(candidate);
            }
        }
        log::debug!(
            "Placed {} mines on {:?} board, first move at {:?}",
            mines.len(),
            dimensions,
            first_move
        );

        Ok(Self {
            dimensions: Coords::from_slice(dimensions),
            mines,
        })
    }
}
