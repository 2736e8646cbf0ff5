use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::sync::mpsc::Sender;

use crate::commands::PuzzleCommand;
use crate::error::PuzzleError;
use crate::formula::BoardResult;
use crate::grading::GradeReport;

pub static PUZZLE_COMMAND_SENDER: Lazy<Mutex<Option<Sender<PuzzleCommand>>>> =
    Lazy::new(|| Mutex::new(None));

/// Last result published by the puzzle loop, read by the host between frames.
pub static LATEST_RESULT: Lazy<Mutex<BoardResult>> = Lazy::new(|| Mutex::new(BoardResult::default()));
pub static LATEST_GRADE: Lazy<Mutex<Option<GradeReport>>> = Lazy::new(|| Mutex::new(None));

/// Queue a command for the puzzle loop.
pub fn send_command(cmd: PuzzleCommand) -> Result<(), PuzzleError> {
    let guard = PUZZLE_COMMAND_SENDER.lock();
    let tx = guard.as_ref().ok_or(PuzzleError::ChannelClosed)?;
    tx.send(cmd).map_err(|_| PuzzleError::ChannelClosed)
}
