use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Complete dump of a [`Board`], hidden mines included.
///
/// Cells are stored row-major in board order. How the snapshot is written to
/// disk is up to the caller, it only needs to round-trip through serde.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub size: Coord,
    pub mine_count: CellCount,
    pub cells: Array2<Cell>,
}

impl BoardSnapshot {
    pub fn cell_at(&self, coords: Coord2) -> Option<Cell> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    pub fn validate(&self) -> Result<()> {
        let side = usize::from(self.size);
        if side == 0 || self.cells.dim() != (side, side) {
            log::warn!(
                "Snapshot shape {:?} does not match declared size {}",
                self.cells.dim(),
                self.size
            );
            return Err(GameError::InvalidBoardShape);
        }

        let found: CellCount = self
            .cells
            .iter()
            .filter(|cell| cell.has_mine())
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX);
        if found != self.mine_count {
            log::warn!(
                "Snapshot declares {} mines but holds {}",
                self.mine_count,
                found
            );
            return Err(GameError::MineCountMismatch {
                expected: self.mine_count,
                found,
            });
        }
        if self.mine_count >= mult(self.size, self.size) {
            return Err(GameError::TooManyMines);
        }

        for ((row, col), cell) in self.cells.indexed_iter() {
            let coords = (row as Coord, col as Coord);
            let count_matches = match cell.adjacent_mine_count() {
                Some(count) => count == self.count_adjacent_mines(coords),
                None => true,
            };
            if !cell.is_consistent() || !count_matches {
                log::warn!("Snapshot cell {:?} is inconsistent: {:?}", coords, cell);
                return Err(GameError::InconsistentCell(coords));
            }
        }

        Ok(())
    }

    fn count_adjacent_mines(&self, coords: Coord2) -> u8 {
        let count = self
            .cells
            .iter_neighbors(coords)
            .filter(|&pos| self.cells[pos.to_nd_index()].has_mine())
            .count();
        count as u8
    }
}

impl Board {
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            size: self.size(),
            mine_count: self.mine_count(),
            cells: self.cells().clone(),
        }
    }

    pub fn from_snapshot(snapshot: BoardSnapshot) -> Result<Self> {
        snapshot.validate()?;
        Ok(Self::from_parts(snapshot.cells, snapshot.mine_count))
    }
}

impl From<&Board> for BoardSnapshot {
    fn from(board: &Board) -> Self {
        board.snapshot()
    }
}

impl TryFrom<BoardSnapshot> for Board {
    type Error = GameError;

    fn try_from(snapshot: BoardSnapshot) -> Result<Self> {
        Self::from_snapshot(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mid_game() -> Board {
        let layout = MineLayout::from_mine_coords(4, &[(0, 3), (2, 2), (3, 0)]).unwrap();
        let mut board = Board::from_layout(layout);
        board.reveal((0, 0)).unwrap();
        board.toggle_flag((3, 0)).unwrap();
        board.toggle_flag((1, 3)).unwrap();
        board
    }

    #[test]
    fn round_trip_preserves_every_cell() {
        let board = mid_game();

        let snapshot = board.snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let restored = Board::from_snapshot(serde_json::from_str(&json).unwrap()).unwrap();

        assert_eq!(restored, board);
        assert_eq!(restored.snapshot().cells, snapshot.cells);
        assert_eq!(restored.is_over(), board.is_over());
        assert_eq!(restored.is_won(), board.is_won());
    }

    #[test]
    fn round_trip_keeps_lost_state() {
        let mut board = mid_game();
        board.reveal((2, 2)).unwrap();

        let restored = Board::try_from(board.snapshot()).unwrap();

        assert_eq!(restored.state(), BoardState::Lost);
        assert_eq!(restored.view_at((2, 2)).unwrap(), CellView::Exploded);
    }

    #[test]
    fn snapshot_exposes_hidden_mines() {
        let snapshot = mid_game().snapshot();

        let cell = snapshot.cell_at((2, 2)).unwrap();
        assert!(cell.has_mine());
        assert!(!cell.is_revealed());
        assert_eq!(snapshot.cell_at((0, 0)).unwrap().adjacent_mine_count(), Some(0));
        assert!(snapshot.cell_at((3, 0)).unwrap().is_flagged());
        assert_eq!(snapshot.cell_at((4, 0)), None);
    }

    #[test]
    fn rejects_wrong_shape() {
        let mut snapshot = mid_game().snapshot();
        snapshot.size = 5;

        assert_eq!(Board::from_snapshot(snapshot), Err(GameError::InvalidBoardShape));
    }

    #[test]
    fn rejects_mine_count_mismatch() {
        let mut snapshot = mid_game().snapshot();
        snapshot.mine_count = 4;

        assert_eq!(
            Board::from_snapshot(snapshot),
            Err(GameError::MineCountMismatch {
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn rejects_tampered_cells() {
        let mut snapshot = mid_game().snapshot();
        snapshot.cells[[0, 0]] = Cell::from_parts(false, true, false, Some(2));

        assert_eq!(
            Board::from_snapshot(snapshot),
            Err(GameError::InconsistentCell((0, 0)))
        );

        let mut snapshot = mid_game().snapshot();
        snapshot.cells[[1, 1]] = Cell::from_parts(false, true, true, Some(1));

        assert_eq!(
            Board::from_snapshot(snapshot),
            Err(GameError::InconsistentCell((1, 1)))
        );
    }
}
