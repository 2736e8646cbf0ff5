pub mod app;
pub mod cell_list;
pub mod commands;
pub mod config;
pub mod error;
pub mod formula;
pub mod grading;
pub mod init_config;
pub mod ions;
pub mod partition;
pub mod piece;
pub mod puzzle;
pub mod store;

pub use error::PuzzleError;
pub use formula::BoardResult;
pub use ions::{IonDefinition, IonRegistry, Polarity, ION_REGISTRY};
pub use piece::{PieceId, PlacedIon};
pub use puzzle::Puzzle;
