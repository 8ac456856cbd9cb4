use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::square::Square;
use crate::*;

/// Valid transitions:
/// - Active -> Won
/// - Active -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardState {
    Active,
    Won,
    Lost,
}

impl BoardState {
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::Active
    }
}

/// A game of minesweeper on a board of any number of dimensions.
///
/// Mines given explicitly are placed at construction. Otherwise only their count is fixed and
/// the positions are drawn on the first reveal, keeping that square and its neighbors clear.
#[derive(Debug)]
pub struct Board {
    grid: Grid<Square>,
    phase: MinePhase,
    free_count: usize,
    revealed_count: usize,
    flagged_count: usize,
    state: BoardState,
    triggered_mine: Option<Coords>,
    rng: SmallRng,
    listeners: Listeners,
}

impl Board {
    pub fn new(config: BoardConfig) -> Result<Self> {
        let mine_count = config.validate()?;
        let BoardConfig {
            dimensions,
            mines,
            seed,
        } = config;

        let mut grid = Grid::new(&dimensions);
        let phase = match mines {
            MineSpec::Count(_) => MinePhase::Pending { mine_count },
            MineSpec::Fixed(points) => {
                let layout = MineLayout::from_points(&dimensions, &points)?;
                apply_layout(&mut grid, &layout);
                MinePhase::Placed(layout)
            }
        };
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        Ok(Self {
            free_count: grid.total_len() - mine_count,
            grid,
            phase,
            revealed_count: 0,
            flagged_count: 0,
            state: BoardState::default(),
            triggered_mine: None,
            rng,
            listeners: Listeners::default(),
        })
    }

    /// Registers a listener, called after every flag, unflag and revealed square.
    pub fn add_move_listener<L: MoveListener + 'static>(&mut self, listener: L) {
        self.listeners.push(Box::new(listener));
    }

    pub fn state(&self) -> BoardState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    pub fn dimensions(&self) -> &[Coord] {
        self.grid.dimensions()
    }

    pub fn mine_count(&self) -> usize {
        self.phase.mine_count()
    }

    /// Squares without a mine, all of them must be revealed to win.
    pub fn free_count(&self) -> usize {
        self.free_count
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed_count
    }

    pub fn flagged_count(&self) -> usize {
        self.flagged_count
    }

    /// How many mines have not been flagged yet, negative when over-flagged.
    pub fn mines_left(&self) -> isize {
        (self.mine_count() as isize) - (self.flagged_count as isize)
    }

    pub fn mines_placed(&self) -> bool {
        self.phase.is_placed()
    }

    /// The mine whose reveal lost the game.
    pub fn triggered_mine(&self) -> Option<&[Coord]> {
        self.triggered_mine.as_deref()
    }

    pub fn place_flag(&mut self, point: &[Coord]) -> Result<MarkOutcome> {
        self.grid.validate(point)?;
        self.check_active()?;

        let square = self.grid.get_mut(point);
        if square.is_revealed || square.is_flagged {
            return Ok(MarkOutcome::NoChange);
        }
        square.is_flagged = true;
        self.flagged_count += 1;
        self.listeners.notify(point, MoveKind::Flag);
        Ok(MarkOutcome::Changed)
    }

    pub fn remove_flag(&mut self, point: &[Coord]) -> Result<MarkOutcome> {
        self.grid.validate(point)?;
        self.check_active()?;

        let square = self.grid.get_mut(point);
        if !square.is_flagged {
            return Ok(MarkOutcome::NoChange);
        }
        square.is_flagged = false;
        self.flagged_count -= 1;
        self.listeners.notify(point, MoveKind::Unflag);
        Ok(MarkOutcome::Changed)
    }

    pub fn toggle_flag(&mut self, point: &[Coord]) -> Result<MarkOutcome> {
        if self.is_flagged(point)? {
            self.remove_flag(point)
        } else {
            self.place_flag(point)
        }
    }

    /// Reveals `point`, opening the surrounding region when it has no adjacent mines.
    ///
    /// Flagged squares are never revealed, neither directly nor by a cascade. The first reveal
    /// on a board without explicit mines places them.
    pub fn reveal(&mut self, point: &[Coord]) -> Result<RevealOutcome> {
        self.grid.validate(point)?;
        self.check_active()?;

        if self.grid.get(point).is_flagged {
            return Ok(RevealOutcome::NoChange);
        }
        self.ensure_mines_placed(point)?;
        log::debug!("Reveal at {:?}", point);

        // depth-first, neighbors pushed in reverse so they pop in grid order
        let mut pending = vec![Coords::from_slice(point)];
        let mut outcome = RevealOutcome::NoChange;
        while let Some(current) = pending.pop() {
            match self.reveal_square(&current) {
                RevealOutcome::NoChange => {}
                RevealOutcome::Revealed => {
                    outcome = RevealOutcome::Revealed;
                    if self.grid.get(&current).surrounding_mines == Some(0) {
                        let start = pending.len();
                        pending.extend(self.grid.neighbors(&current));
                        pending[start..].reverse();
                        log::trace!("Cascading from {:?}", current);
                    }
                }
                ended => return Ok(ended),
            }
        }
        Ok(outcome)
    }

    pub fn is_flagged(&self, point: &[Coord]) -> Result<bool> {
        self.grid.validate(point)?;
        Ok(self.grid.get(point).is_flagged)
    }

    pub fn is_revealed(&self, point: &[Coord]) -> Result<bool> {
        self.grid.validate(point)?;
        Ok(self.grid.get(point).is_revealed)
    }

    /// Number of mines adjacent to `point`, hidden for unrevealed squares until the game ends.
    pub fn surrounding_mine_count(&self, point: &[Coord]) -> Result<usize> {
        self.grid.validate(point)?;
        let square = self.grid.get(point);
        if !(self.is_over() || square.is_revealed) {
            return Err(GameError::NotEnded);
        }
        square.surrounding_mines.ok_or(GameError::NotEnded)
    }

    pub fn contains_mine(&self, point: &[Coord]) -> Result<bool> {
        self.grid.validate(point)?;
        self.check_over()?;
        Ok(self.grid.get(point).contains_mine)
    }

    /// Every mine on the board, only available once the game ended.
    pub fn mines(&self) -> Result<impl Iterator<Item = &Coords>> {
        self.check_over()?;
        let layout = self.phase.layout().ok_or(GameError::NotEnded)?;
        Ok(layout.iter())
    }

    pub fn all_points(&self) -> PointIter {
        self.grid.all_points()
    }

    pub fn neighbors(&self, point: &[Coord]) -> Result<NeighborIter> {
        self.grid.validate(point)?;
        Ok(self.grid.neighbors(point))
    }

    pub fn flagged_neighbors(&self, point: &[Coord]) -> Result<impl Iterator<Item = Coords>> {
        self.filter_neighbors(point, |square| square.is_flagged)
    }

    pub fn revealed_neighbors(&self, point: &[Coord]) -> Result<impl Iterator<Item = Coords>> {
        self.filter_neighbors(point, |square| square.is_revealed)
    }

    /// Neighbors that are neither flagged nor revealed.
    pub fn blank_neighbors(&self, point: &[Coord]) -> Result<impl Iterator<Item = Coords>> {
        self.filter_neighbors(point, Square::is_blank)
    }

    pub fn random_point(&mut self) -> Coords {
        random_point(self.grid.dimensions(), &mut self.rng)
    }

    fn filter_neighbors(
        &self,
        point: &[Coord],
        predicate: impl Fn(Square) -> bool,
    ) -> Result<impl Iterator<Item = Coords>> {
        Ok(self
            .neighbors(point)?
            .filter(move |neighbor| predicate(*self.grid.get(neighbor))))
    }

    fn ensure_mines_placed(&mut self, first_move: &[Coord]) -> Result<()> {
        if let MinePhase::Pending { mine_count } = self.phase {
            let layout =
                MineLayout::generate(self.grid.dimensions(), mine_count, first_move, &mut self.rng)?;
            apply_layout(&mut self.grid, &layout);
            self.phase = MinePhase::Placed(layout);
        }
        Ok(())
    }

    /// Reveals one square without cascading, ending the game on a mine or the last free square.
    fn reveal_square(&mut self, point: &[Coord]) -> RevealOutcome {
        let square = self.grid.get_mut(point);
        if square.is_flagged || square.is_revealed {
            return RevealOutcome::NoChange;
        }
        square.is_revealed = true;
        let has_mine = square.contains_mine;

        self.listeners.notify(point, MoveKind::Reveal);
        self.revealed_count += 1;
        log::trace!("Revealed {:?}", point);

        if has_mine {
            self.triggered_mine = Some(Coords::from_slice(point));
            self.end_game(false);
            RevealOutcome::Lost
        } else if self.revealed_count == self.free_count {
            self.end_game(true);
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        }
    }

    fn end_game(&mut self, won: bool) {
        if self.state.is_over() {
            return;
        }

        self.state = if won {
            BoardState::Won
        } else {
            BoardState::Lost
        };
        log::debug!("Game ended: {:?}", self.state);
    }

    fn check_active(&self) -> Result<()> {
        if self.state.is_over() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }

    fn check_over(&self) -> Result<()> {
        if self.state.is_over() {
            Ok(())
        } else {
            Err(GameError::NotEnded)
        }
    }
}

/// Marks mines on the grid and computes every square's surrounding count.
fn apply_layout(grid: &mut Grid<Square>, layout: &MineLayout) {
    for mine in layout.iter() {
        grid.get_mut(mine).contains_mine = true;
    }

    for point in grid.all_points() {
        let count = grid
            .neighbors(&point)
            .filter(|neighbor| grid.get(neighbor).contains_mine)
            .count();
        grid.get_mut(&point).surrounding_mines = Some(count);
    }
}
