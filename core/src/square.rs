/// State of one square on the board. Owned by the board, never handed out mid-game.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Square {
    pub contains_mine: bool,
    /// `None` until mines have been placed.
    pub surrounding_mines: Option<usize>,
    pub is_revealed: bool,
    pub is_flagged: bool,
}

impl Square {
    /// Neither flagged nor revealed.
    pub const fn is_blank(self) -> bool {
        !self.is_revealed && !self.is_flagged
    }
}
