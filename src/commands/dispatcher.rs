use crate::error::PuzzleError;
use crate::puzzle::Puzzle;

use super::{board, drag, CommandOutcome, PuzzleCommand};

/// Process a single `PuzzleCommand` by delegating to the appropriate handler.
pub fn process_command(cmd: PuzzleCommand, puzzle: &mut Puzzle) -> Result<CommandOutcome, PuzzleError> {
    match cmd {
        PuzzleCommand::AddPiece { symbol, position } => {
            board::handle_add_piece(puzzle, &symbol, position)
        }
        PuzzleCommand::MovePiece { id, position } => board::handle_move_piece(puzzle, id, position),
        PuzzleCommand::MoveGroup { id, delta } => board::handle_move_group(puzzle, id, delta),
        PuzzleCommand::RemovePiece { id } => board::handle_remove_piece(puzzle, id),
        PuzzleCommand::ClearAll => board::handle_clear_all(puzzle),
        PuzzleCommand::BeginDrag { point } => drag::handle_begin_drag(puzzle, point),
        PuzzleCommand::DragTo { point } => drag::handle_drag_to(puzzle, point),
        PuzzleCommand::EndDrag => drag::handle_end_drag(puzzle),
    }
}

/// Collapse each run of consecutive `DragTo` commands to its last element,
/// so a batch triggers at most one live pass per run.
pub fn coalesce_drag_moves(commands: Vec<PuzzleCommand>) -> Vec<PuzzleCommand> {
    let mut out: Vec<PuzzleCommand> = Vec::with_capacity(commands.len());
    for cmd in commands {
        if matches!(cmd, PuzzleCommand::DragTo { .. })
            && matches!(out.last(), Some(PuzzleCommand::DragTo { .. }))
        {
            out.pop();
        }
        out.push(cmd);
    }
    out
}
