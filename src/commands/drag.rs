use log::debug;
use ultraviolet::Vec2;

use super::CommandOutcome;
use crate::error::PuzzleError;
use crate::puzzle::Puzzle;

pub fn handle_begin_drag(puzzle: &mut Puzzle, point: Vec2) -> Result<CommandOutcome, PuzzleError> {
    let picked = puzzle.begin_drag(point);
    if picked.is_none() {
        debug!("Nothing to pick at ({}, {})", point.x, point.y);
    }
    Ok(CommandOutcome::Picked(picked))
}

pub fn handle_drag_to(puzzle: &mut Puzzle, point: Vec2) -> Result<CommandOutcome, PuzzleError> {
    Ok(match puzzle.drag_to(point) {
        Some(snap) => CommandOutcome::Snapped(snap),
        None => CommandOutcome::Done,
    })
}

pub fn handle_end_drag(puzzle: &mut Puzzle) -> Result<CommandOutcome, PuzzleError> {
    puzzle.end_drag();
    Ok(CommandOutcome::Done)
}
