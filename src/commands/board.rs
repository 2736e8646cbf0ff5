use ultraviolet::Vec2;

use super::CommandOutcome;
use crate::error::PuzzleError;
use crate::piece::PieceId;
use crate::puzzle::Puzzle;

pub fn handle_add_piece(
    puzzle: &mut Puzzle,
    symbol: &str,
    position: Option<Vec2>,
) -> Result<CommandOutcome, PuzzleError> {
    let id = match position {
        Some(position) => puzzle.add_piece(symbol, position)?,
        None => puzzle.add_piece_at_spawn(symbol)?,
    };
    Ok(CommandOutcome::Added(id))
}

pub fn handle_move_piece(
    puzzle: &mut Puzzle,
    id: PieceId,
    position: Vec2,
) -> Result<CommandOutcome, PuzzleError> {
    puzzle.move_piece(id, position)?;
    Ok(CommandOutcome::Done)
}

pub fn handle_move_group(
    puzzle: &mut Puzzle,
    id: PieceId,
    delta: Vec2,
) -> Result<CommandOutcome, PuzzleError> {
    puzzle.move_group(id, delta)?;
    Ok(CommandOutcome::Done)
}

pub fn handle_remove_piece(puzzle: &mut Puzzle, id: PieceId) -> Result<CommandOutcome, PuzzleError> {
    puzzle.remove_piece(id)?;
    Ok(CommandOutcome::Done)
}

pub fn handle_clear_all(puzzle: &mut Puzzle) -> Result<CommandOutcome, PuzzleError> {
    puzzle.clear_all();
    Ok(CommandOutcome::Done)
}
