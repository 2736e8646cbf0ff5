// error.rs
// Error type shared by the registry, the piece store and the puzzle controller

use thiserror::Error;

use crate::piece::PieceId;

/// Errors returned by puzzle operations.
///
/// A charge imbalance is not an error: it is reported through
/// [`BoardResult::is_valid`](crate::formula::BoardResult::is_valid).
#[derive(Debug, Error)]
pub enum PuzzleError {
    /// The requested ion symbol is not in the registry.
    #[error("unknown ion symbol: {0}")]
    UnknownSymbol(String),

    /// The referenced piece is no longer on the board.
    #[error("piece {0} not found")]
    NotFound(PieceId),

    /// The ion catalog has invalid content.
    #[error("invalid ion catalog: {0}")]
    Catalog(String),

    /// The ion catalog or an init config could not be parsed.
    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// Host configuration is inconsistent.
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("puzzle command channel is closed")]
    ChannelClosed,

    #[error("puzzle loop thread panicked")]
    LoopPanicked,
}
