use serde::{Deserialize, Serialize};

use crate::*;

/// The two supported board presets.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardSize {
    #[default]
    Small,
    Large,
}

impl BoardSize {
    pub const SMALL_SIDE: Coord = 9;
    pub const LARGE_SIDE: Coord = 16;

    /// Snaps a requested side length to a preset, anything unknown becomes `Small`.
    pub fn from_requested(requested: usize) -> Self {
        match requested {
            n if n == usize::from(Self::SMALL_SIDE) => Self::Small,
            n if n == usize::from(Self::LARGE_SIDE) => Self::Large,
            other => {
                log::debug!("Unsupported board size {}, falling back to small", other);
                Self::Small
            }
        }
    }

    pub const fn side(self) -> Coord {
        match self {
            Self::Small => Self::SMALL_SIDE,
            Self::Large => Self::LARGE_SIDE,
        }
    }

    pub const fn mine_count(self) -> CellCount {
        match self {
            Self::Small => 10,
            Self::Large => 40,
        }
    }

    pub const fn config(self) -> GameConfig {
        GameConfig::new_unchecked(self.side(), self.mine_count())
    }
}

/// Side length and mine count of a board that leaves at least one safe cell.
///
/// Only built from a [`BoardSize`] preset or through [`GameConfig::new`], so
/// mine placement never has to re-check it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub(crate) size: Coord,
    pub(crate) mines: CellCount,
}

impl GameConfig {
    pub(crate) const fn new_unchecked(size: Coord, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Rejects boards that rejection sampling could never fill.
    pub fn new(size: Coord, mines: CellCount) -> Result<Self> {
        if size == 0 {
            return Err(GameError::InvalidSize);
        }
        if mines >= mult(size, size) {
            return Err(GameError::TooManyMines);
        }
        Ok(Self::new_unchecked(size, mines))
    }

    pub const fn size(&self) -> Coord {
        self.size
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }
}

impl From<BoardSize> for GameConfig {
    fn from(size: BoardSize) -> Self {
        size.config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_match_classic_difficulties() {
        assert_eq!(BoardSize::Small.config(), GameConfig { size: 9, mines: 10 });
        assert_eq!(BoardSize::Large.config(), GameConfig { size: 16, mines: 40 });
    }

    #[test]
    fn unknown_sizes_fall_back_to_small() {
        assert_eq!(BoardSize::from_requested(9), BoardSize::Small);
        assert_eq!(BoardSize::from_requested(16), BoardSize::Large);
        assert_eq!(BoardSize::from_requested(0), BoardSize::Small);
        assert_eq!(BoardSize::from_requested(12), BoardSize::Small);
        assert_eq!(BoardSize::from_requested(usize::MAX), BoardSize::Small);
    }

    #[test]
    fn config_rejects_full_boards() {
        assert_eq!(GameConfig::new(2, 4), Err(GameError::TooManyMines));
        assert_eq!(GameConfig::new(2, 5), Err(GameError::TooManyMines));
        assert_eq!(GameConfig::new(3, 9), Err(GameError::TooManyMines));
        assert_eq!(GameConfig::new(3, 12), Err(GameError::TooManyMines));
        assert_eq!(GameConfig::new(3, 8), Ok(GameConfig { size: 3, mines: 8 }));
    }

    #[test]
    fn config_rejects_empty_board() {
        assert_eq!(GameConfig::new(0, 0), Err(GameError::InvalidSize));
        assert_eq!(GameConfig::new(0, 1), Err(GameError::InvalidSize));
    }

    #[test]
    fn nearly_full_config_keeps_a_safe_cell() {
        let config = GameConfig::new(2, 3).unwrap();

        let board = Board::with_generator(config, RandomMinefieldGenerator::new(1));

        assert_eq!((config.size(), config.mines()), (2, 3));
        assert_eq!(board.mine_count(), 3);
        assert!(!board.is_won());
        assert!(!board.is_over());
    }
}
