use ndarray::Array2;

/// Single coordinate axis used for board side length and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

pub trait NeighborIterExt {
    /// All in-bounds neighbors, orthogonal and diagonal.
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;

    /// In-bounds orthogonal neighbors only, in left, right, up, down order.
    fn iter_orthogonal(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        NeighborIter::new(index, bounds_of(self), &DISPLACEMENTS)
    }

    fn iter_orthogonal(&self, index: Coord2) -> NeighborIter {
        NeighborIter::new(index, bounds_of(self), &ORTHOGONAL_DISPLACEMENTS)
    }
}

fn bounds_of<T>(array: &Array2<T>) -> Coord2 {
    let (rows, cols) = array.dim();
    (saturate(rows), saturate(cols))
}

fn saturate(len: usize) -> Coord {
    len.try_into().unwrap_or(Coord::MAX)
}

const DISPLACEMENTS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const ORTHOGONAL_DISPLACEMENTS: [(isize, isize); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    let (max_row, max_col) = bounds;

    let next_row = row.checked_add_signed(d_row.try_into().ok()?)?;
    if next_row >= max_row {
        return None;
    }

    let next_col = col.checked_add_signed(d_col.try_into().ok()?)?;
    if next_col >= max_col {
        return None;
    }

    Some((next_row, next_col))
}

/// Walks the in-bounds cells around `center` for one neighborhood.
///
/// Two neighborhoods exist: the full 8-cell ring used for mine counts, and the
/// 4 orthogonal cells (left, right, up, down) a zero cell spreads to. Offsets
/// that fall off the board are skipped, so corners yield 3 or 2 cells.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    displacements: &'static [(isize, isize)],
    index: u8,
}

impl NeighborIter {
    fn new(center: Coord2, bounds: Coord2, displacements: &'static [(isize, isize)]) -> Self {
        Self {
            center,
            bounds,
            displacements,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let delta = *self.displacements.get(usize::from(self.index))?;
            self.index += 1;

            if let Some(next_item) = apply_delta(self.center, delta, self.bounds) {
                return Some(next_item);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn neighbors_of_interior_cell() {
        let grid: Array2<bool> = Array2::default((3, 3));

        let neighbors: Vec<_> = grid.iter_neighbors((1, 1)).collect();

        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&(1, 1)));
    }

    #[test]
    fn neighbors_clipped_at_corner() {
        let grid: Array2<bool> = Array2::default((3, 3));

        let neighbors: Vec<_> = grid.iter_neighbors((0, 0)).collect();

        assert_eq!(neighbors, [(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn orthogonal_order_is_left_right_up_down() {
        let grid: Array2<bool> = Array2::default((3, 3));

        let neighbors: Vec<_> = grid.iter_orthogonal((1, 1)).collect();

        assert_eq!(neighbors, [(1, 0), (1, 2), (0, 1), (2, 1)]);
    }

    #[test]
    fn orthogonal_clipped_at_far_edge() {
        let grid: Array2<bool> = Array2::default((2, 2));

        let neighbors: Vec<_> = grid.iter_orthogonal((1, 1)).collect();

        assert_eq!(neighbors, [(1, 0), (0, 1)]);
    }
}
