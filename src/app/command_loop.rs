use log::{debug, warn};
use std::sync::mpsc::Receiver;

use crate::commands::{self, CommandOutcome, PuzzleCommand};
use crate::puzzle::Puzzle;

use super::state::{LATEST_GRADE, LATEST_RESULT};

/// Apply one frame's worth of commands, then publish the result.
/// Returns the number of commands applied after coalescing.
pub fn apply_batch(batch: Vec<PuzzleCommand>, puzzle: &mut Puzzle) -> usize {
    let batch = commands::coalesce_drag_moves(batch);
    let applied = batch.len();
    for cmd in batch {
        match commands::process_command(cmd, puzzle) {
            Ok(CommandOutcome::Added(id)) => debug!("Piece {} placed", id),
            Ok(CommandOutcome::Snapped(snap)) => {
                debug!("Piece {} snapped to {}", snap.piece, snap.partner)
            }
            Ok(_) => {}
            Err(e) => warn!("Command rejected: {}", e),
        }
    }
    publish(puzzle);
    applied
}

pub fn publish(puzzle: &Puzzle) {
    *LATEST_RESULT.lock() = puzzle.current_result().clone();
    *LATEST_GRADE.lock() = puzzle.graded_result();
}

/// Block for the first command of each frame, then drain whatever else is
/// queued. Returns the puzzle once every sender is gone.
pub fn run_puzzle_loop(rx: Receiver<PuzzleCommand>, mut puzzle: Puzzle) -> Puzzle {
    let mut frames = 0usize;
    while let Ok(first) = rx.recv() {
        let mut batch = vec![first];
        batch.extend(rx.try_iter());
        apply_batch(batch, &mut puzzle);
        frames += 1;
    }
    debug!("Command channel closed after {} frames", frames);
    puzzle
}
