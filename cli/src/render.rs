use std::fmt::Write;

use sapper_core::{Board, CellView};

pub fn glyph(view: CellView) -> char {
    match view {
        CellView::Hidden => '*',
        CellView::Flagged => 'F',
        CellView::Revealed(0) => '_',
        CellView::Revealed(count) => char::from_digit(count.into(), 10).unwrap_or('?'),
        CellView::Exploded => 'B',
        CellView::Mine => 'M',
    }
}

/// Text grid with 1-based column headers and row labels.
pub fn render(board: &Board) -> String {
    let size = board.size();
    let mut out = String::from("   ");

    for col in 1..=size {
        let _ = write!(out, "{:>3}", col);
    }
    out.push('\n');

    for row in 0..size {
        let _ = write!(out, "{:>3}", row + 1);
        for col in 0..size {
            let view = board.view_at((row, col)).unwrap_or_default();
            let _ = write!(out, "{:>3}", glyph(view));
        }
        out.push('\n');
    }

    let _ = write!(out, "Mines left: {}", board.mines_left());
    out
}
