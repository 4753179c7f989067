use alloc::collections::VecDeque;
use ndarray::Array2;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardState {
    InProgress,
    Won,
    Lost,
}

impl BoardState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// A square minefield together with everything the player has done to it.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
    game_over: bool,
}

impl Board {
    /// Creates a board for the requested side length, snapped to a [`BoardSize`] preset.
    pub fn new<R: Rng + ?Sized>(requested: usize, rng: &mut R) -> Self {
        let config = BoardSize::from_requested(requested).config();
        Self::from_layout(MineLayout::generate(config, rng))
    }

    pub fn from_seed(requested: usize, seed: u64) -> Self {
        log::debug!("Generating board with seed {}", seed);
        let config = BoardSize::from_requested(requested).config();
        Self::with_generator(config, RandomMinefieldGenerator::new(seed))
    }

    pub fn with_generator(config: GameConfig, generator: impl MinefieldGenerator) -> Self {
        Self::from_layout(generator.generate(config))
    }

    pub fn from_layout(layout: MineLayout) -> Self {
        let mine_count = layout.mine_count();
        let cells = layout.into_mine_mask().mapv(Cell::new);
        Self {
            cells,
            mine_count,
            game_over: false,
        }
    }

    /// Rebuilds a board from already validated parts.
    pub(crate) fn from_parts(cells: Array2<Cell>, mine_count: CellCount) -> Self {
        let game_over = cells.iter().any(|cell| cell.has_mine() && cell.is_revealed());
        Self {
            cells,
            mine_count,
            game_over,
        }
    }

    pub fn size(&self) -> Coord {
        let (rows, _) = self.cells.dim();
        rows.try_into().unwrap_or(Coord::MAX)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn flag_count(&self) -> CellCount {
        self.count_cells(|cell| cell.is_flagged())
    }

    pub fn revealed_count(&self) -> CellCount {
        self.count_cells(|cell| cell.is_revealed())
    }

    /// How many mines have not been flagged yet, negative when over-flagged.
    pub fn mines_left(&self) -> isize {
        (self.mine_count as isize) - (self.flag_count() as isize)
    }

    pub fn is_over(&self) -> bool {
        self.game_over || self.is_won()
    }

    /// Every safe cell revealed and no mine revealed.
    pub fn is_won(&self) -> bool {
        self.cells
            .iter()
            .all(|cell| cell.has_mine() != cell.is_revealed())
    }

    pub fn state(&self) -> BoardState {
        if self.game_over {
            BoardState::Lost
        } else if self.is_won() {
            BoardState::Won
        } else {
            BoardState::InProgress
        }
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// Renderer-safe view of a cell, mines stay hidden until the game is over.
    pub fn view_at(&self, coords: Coord2) -> Result<CellView> {
        let coords = self.validate_coords(coords)?;
        let cell = self.cells[coords.to_nd_index()];

        Ok(match cell.adjacent_mine_count() {
            Some(count) => CellView::Revealed(count),
            None if cell.is_revealed() => CellView::Exploded,
            None if cell.is_flagged() => CellView::Flagged,
            None if cell.has_mine() && self.is_over() => CellView::Mine,
            None => CellView::Hidden,
        })
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.validate_coords(coords)?;
        if self.is_over() {
            return Ok(MarkOutcome::NoChange);
        }

        let cell = &mut self.cells[coords.to_nd_index()];
        let flagged = !cell.is_flagged();
        Ok(cell.set_flag(flagged))
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;
        if self.is_over() {
            log::debug!("Ignoring reveal at {:?}, game is over", coords);
            return Ok(RevealOutcome::NoChange);
        }

        let cell = self.cells[coords.to_nd_index()];
        if cell.is_flagged() {
            return Ok(RevealOutcome::NoChange);
        }

        if cell.has_mine() {
            self.cells[coords.to_nd_index()].detonate();
            self.game_over = true;
            log::debug!("Mine revealed at {:?}, game lost", coords);
            return Ok(RevealOutcome::HitMine);
        }

        if cell.is_revealed() {
            return Ok(RevealOutcome::NoChange);
        }

        self.explore(coords);

        if self.is_won() {
            log::debug!("All safe cells revealed, game won");
            Ok(RevealOutcome::Won)
        } else {
            Ok(RevealOutcome::Revealed)
        }
    }

    /// Breadth-first reveal starting at a safe cell.
    ///
    /// Every dequeued cell gets its 8-neighbor mine count. Only zero cells
    /// propagate, and only to orthogonal neighbors that are still hidden and
    /// unflagged; the nonzero perimeter is revealed but not expanded.
    fn explore(&mut self, start: Coord2) {
        let mut queued: Array2<bool> = Array2::default(self.cells.dim());
        let mut to_visit = VecDeque::from([start]);
        queued[start.to_nd_index()] = true;

        while let Some(coords) = to_visit.pop_front() {
            let count = self.adjacent_mine_count(coords);
            self.cells[coords.to_nd_index()].open(count);
            log::trace!("Opened {:?}, adjacent mines: {}", coords, count);

            if count != 0 {
                continue;
            }

            for next in self.cells.iter_orthogonal(coords) {
                let cell = self.cells[next.to_nd_index()];
                let slot = &mut queued[next.to_nd_index()];
                if *slot || cell.is_revealed() || cell.is_flagged() {
                    continue;
                }
                *slot = true;
                to_visit.push_back(next);
            }
        }
    }

    pub(crate) fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        let count = self
            .cells
            .iter_neighbors(coords)
            .filter(|&pos| self.cells[pos.to_nd_index()].has_mine())
            .count();
        count as u8
    }

    pub(crate) fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    fn count_cells(&self, predicate: impl Fn(&Cell) -> bool) -> CellCount {
        let count = self.cells.iter().filter(|cell| predicate(cell)).count();
        count.try_into().unwrap_or(CellCount::MAX)
    }

    #[cfg(test)]
    pub(crate) fn conceal(&mut self, coords: Coord2) {
        self.cells[coords.to_nd_index()].conceal();
    }
}
