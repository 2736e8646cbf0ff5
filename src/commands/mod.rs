// commands/mod.rs
// Board commands queued by the host and applied to the puzzle in frame-sized batches

use ultraviolet::Vec2;

use crate::piece::PieceId;
use crate::puzzle::Snap;

pub mod board;
pub mod dispatcher;
pub mod drag;

pub use dispatcher::{coalesce_drag_moves, process_command};

#[derive(Clone, Debug, PartialEq)]
pub enum PuzzleCommand {
    /// Place a piece; `None` uses the spawn point for its polarity
    AddPiece { symbol: String, position: Option<Vec2> },
    MovePiece { id: PieceId, position: Vec2 },
    MoveGroup { id: PieceId, delta: Vec2 },
    RemovePiece { id: PieceId },
    ClearAll,
    BeginDrag { point: Vec2 },
    DragTo { point: Vec2 },
    EndDrag,
}

/// What a successfully applied command did.
#[derive(Clone, Debug, PartialEq)]
pub enum CommandOutcome {
    Added(PieceId),
    Picked(Option<PieceId>),
    Snapped(Snap),
    Done,
}
