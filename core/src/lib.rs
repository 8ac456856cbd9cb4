//! Board engine for minesweeper on boards with any number of dimensions.
//!
//! The engine owns all game state and exposes moves and queries; rendering and input belong to
//! the driver, which can watch changes through [`MoveListener`]s.

use core::ops::BitOr;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use listener::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod grid;
mod listener;
mod square;
mod types;

/// How mines are determined for a new board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MineSpec {
    /// Mines are placed randomly on the first reveal. `None` uses a fifth of the squares.
    Count(Option<usize>),
    /// Mines at exactly these points, placed immediately.
    Fixed(Vec<Coords>),
}

impl Default for MineSpec {
    fn default() -> Self {
        Self::Count(None)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub dimensions: Vec<Coord>,
    pub mines: MineSpec,
    /// Seed for random mine placement, drawn from the OS when absent.
    pub seed: Option<u64>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(vec![8, 8])
    }
}

impl BoardConfig {
    pub fn new(dimensions: Vec<Coord>) -> Self {
        Self {
            dimensions,
            mines: MineSpec::default(),
            seed: None,
        }
    }

    pub fn with_mine_count(self, mine_count: usize) -> Self {
        Self {
            mines: MineSpec::Count(Some(mine_count)),
            ..self
        }
    }

    pub fn with_mines(self, mines: Vec<Coords>) -> Self {
        Self {
            mines: MineSpec::Fixed(mines),
            ..self
        }
    }

    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    pub fn total_squares(&self) -> Option<usize> {
        total_squares(&self.dimensions)
    }

    /// Checks the configuration and returns the number of mines the board will hold.
    pub fn validate(&self) -> Result<usize> {
        if self.dimensions.is_empty() || self.dimensions.contains(&0) {
            return Err(GameError::InvalidDimensions);
        }
        let total = self.total_squares().ok_or(GameError::InvalidDimensions)?;

        let mine_count = match &self.mines {
            MineSpec::Count(count) => count.unwrap_or(total / 5),
            MineSpec::Fixed(points) => MineLayout::from_points(&self.dimensions, points)?.mine_count(),
        };
        if mine_count >= total {
            return Err(GameError::TooManyMines);
        }

        Ok(mine_count)
    }
}

/// Outcome of placing or removing a flag
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

/// Outcome of revealing a square
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    Won,
    Lost,
}

impl RevealOutcome {
    /// Whether this outcome could have caused an update to the board
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            Won => true,
            Lost => true,
        }
    }

    /// Whether the move ended the game
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Used to merge outcomes of several reveals
impl BitOr for RevealOutcome {
    type Output = RevealOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use RevealOutcome::*;
        match (self, rhs) {
            (Lost, _) => Lost,
            (_, Lost) => Lost,
            (Won, _) => Won,
            (_, Won) => Won,
            (Revealed, _) => Revealed,
            (_, Revealed) => Revealed,
            (NoChange, NoChange) => NoChange,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_eight_by_eight_with_fifth_mines() {
        let config = BoardConfig::default();

        assert_eq!(config.dimensions, vec![8, 8]);
        assert_eq!(config.validate(), Ok(12));
    }

    #[test]
    fn validate_rejects_bad_dimensions() {
        assert_eq!(
            BoardConfig::new(vec![]).validate(),
            Err(GameError::InvalidDimensions)
        );
        assert_eq!(
            BoardConfig::new(vec![4, 0]).validate(),
            Err(GameError::InvalidDimensions)
        );
    }

    #[test]
    fn validate_rejects_mines_filling_board() {
        let full = BoardConfig::new(vec![2, 2]).with_mine_count(4);
        assert_eq!(full.validate(), Err(GameError::TooManyMines));
        assert_eq!(Board::new(full).err(), Some(GameError::TooManyMines));

        let points = PointIter::over(&[2, 2]).collect();
        let fixed = BoardConfig::new(vec![2, 2]).with_mines(points);
        assert_eq!(fixed.validate(), Err(GameError::TooManyMines));
    }

    #[test]
    fn validate_counts_distinct_fixed_mines() {
        let mines = vec![Coords::from_slice(&[1, 1]), Coords::from_slice(&[1, 1])];
        let config = BoardConfig::new(vec![3, 3]).with_mines(mines);

        assert_eq!(config.validate(), Ok(1));
    }

    #[test]
    fn validate_rejects_fixed_mine_off_board() {
        let config = BoardConfig::new(vec![3, 3]).with_mines(vec![Coords::from_slice(&[0, 3])]);

        assert_eq!(config.validate(), Err(GameError::InvalidCoords));
    }

    #[test]
    fn config_loads_from_json() {
        let config: BoardConfig =
            serde_json::from_str(r#"{"dimensions": [4, 4, 4], "mines": {"count": 10}, "seed": 7}"#)
                .unwrap();

        assert_eq!(
            config,
            BoardConfig::new(vec![4, 4, 4]).with_mine_count(10).with_seed(7)
        );
    }

    #[test]
    fn config_json_fills_missing_fields() {
        let config: BoardConfig =
            serde_json::from_str(r#"{"dimensions": [5], "mines": {"fixed": [[4]]}}"#).unwrap();

        assert_eq!(config.seed, None);
        assert_eq!(config.validate(), Ok(1));
        let mut board = Board::new(config).unwrap();
        assert_eq!(board.reveal(&[0]), Ok(RevealOutcome::Won));
    }

    #[test]
    fn merged_outcome_prefers_loss() {
        use RevealOutcome::*;

        assert_eq!(Revealed | Lost, Lost);
        assert_eq!(Won | Revealed, Won);
        assert_eq!(NoChange | NoChange, NoChange);
        assert!(!NoChange.has_update());
        assert!(Lost.is_terminal());
        assert!(MarkOutcome::Changed.has_update());
    }
}
