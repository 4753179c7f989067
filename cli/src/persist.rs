use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use sapper_core::{Board, BoardSnapshot};

pub fn save(path: &Path, board: &Board) -> Result<()> {
    let json = serde_json::to_string_pretty(&board.snapshot()).context("Could not encode board")?;
    fs::write(path, json)
        .with_context(|| format!("Could not write save file {}", path.display()))?;
    log::info!("Saved game to {}", path.display());
    Ok(())
}

pub fn load(path: &Path) -> Result<Board> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Could not read save file {}", path.display()))?;
    let snapshot: BoardSnapshot = serde_json::from_str(&json)
        .with_context(|| format!("Save file {} is not a board snapshot", path.display()))?;
    let board = Board::from_snapshot(snapshot)
        .with_context(|| format!("Save file {} holds an invalid board", path.display()))?;
    log::info!("Loaded game from {}", path.display());
    Ok(board)
}
