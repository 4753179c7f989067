use serde::{Deserialize, Serialize};

use crate::MarkOutcome;

/// State of a single grid position.
///
/// Only the owning [`Board`](crate::Board) mutates cells. Outside the crate a
/// cell is only ever seen as a copy, through a [`BoardSnapshot`](crate::BoardSnapshot).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    has_mine: bool,
    revealed: bool,
    flagged: bool,
    adjacent_mines: Option<u8>,
}

impl Cell {
    pub(crate) const fn new(has_mine: bool) -> Self {
        Self {
            has_mine,
            revealed: false,
            flagged: false,
            adjacent_mines: None,
        }
    }

    pub const fn has_mine(self) -> bool {
        self.has_mine
    }

    pub const fn is_revealed(self) -> bool {
        self.revealed
    }

    pub const fn is_flagged(self) -> bool {
        self.flagged
    }

    /// Mines among the up-to-8 neighbors, known only once revealed as safe.
    pub const fn adjacent_mine_count(self) -> Option<u8> {
        self.adjacent_mines
    }

    /// Whether the stored fields can occur during play.
    pub const fn is_consistent(self) -> bool {
        match (self.revealed, self.has_mine, self.adjacent_mines) {
            (true, _, _) if self.flagged => false,
            (true, false, Some(count)) => count <= 8,
            (true, true, None) => true,
            (false, _, None) => true,
            _ => false,
        }
    }

    pub(crate) fn open(&mut self, adjacent_mines: u8) {
        debug_assert!(!self.has_mine);
        self.revealed = true;
        self.flagged = false;
        self.adjacent_mines = Some(adjacent_mines);
    }

    pub(crate) fn detonate(&mut self) {
        debug_assert!(self.has_mine);
        self.revealed = true;
        self.flagged = false;
        self.adjacent_mines = None;
    }

    /// Flags on revealed cells are ignored.
    pub(crate) fn set_flag(&mut self, flagged: bool) -> MarkOutcome {
        if self.revealed || self.flagged == flagged {
            return MarkOutcome::NoChange;
        }
        self.flagged = flagged;
        MarkOutcome::Changed
    }

    #[cfg(test)]
    pub(crate) fn conceal(&mut self) {
        self.revealed = false;
        self.adjacent_mines = None;
    }

    #[cfg(test)]
    pub(crate) const fn from_parts(
        has_mine: bool,
        revealed: bool,
        flagged: bool,
        adjacent_mines: Option<u8>,
    ) -> Self {
        Self {
            has_mine,
            revealed,
            flagged,
            adjacent_mines,
        }
    }
}

/// What a renderer is allowed to know about a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    #[default]
    Hidden,
    Flagged,
    Revealed(u8),
    /// The mine that ended the game.
    Exploded,
    /// Unflagged mine, disclosed once the game is over.
    Mine,
}

impl CellView {
    pub const fn is_unrevealed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged | Self::Mine)
    }
}
