// config.rs
// Centralized configuration for board geometry and bonding parameters

use serde::{Deserialize, Serialize};
use ultraviolet::Vec2;

// ====================
// Bonding Parameters
// ====================
/// Maximum distance between a socket and a plug for a bond to form (board units).
pub const SNAP_THRESHOLD: f32 = 30.0;

// ====================
// Piece Geometry
// ====================
pub const PIECE_WIDTH: f32 = 120.0;
pub const PIECE_HEIGHT: f32 = 80.0;

// ====================
// Board Geometry
// ====================
pub const BOARD_WIDTH: f32 = 800.0;
pub const BOARD_HEIGHT: f32 = 500.0; // Fixed canvas height of the puzzle view
/// Horizontal spawn point for new cations, as a fraction of board width
pub const CATION_SPAWN_X_FRAC: f32 = 0.25;
/// Horizontal spawn point for new anions, as a fraction of board width
pub const ANION_SPAWN_X_FRAC: f32 = 0.75;

// ====================
// Broadphase Parameters
// ====================
/// Cell size for the bonding broadphase, one piece width.
pub const CELL_SIZE: f32 = PIECE_WIDTH;

/// Runtime-adjustable puzzle parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    pub snap_threshold: f32,
    pub piece_size: Vec2,
    pub board_width: f32,
    pub board_height: f32,
    /// Snap the dragged piece onto a newly matched connector during drags
    #[serde(default = "default_snap_on_drag")]
    pub snap_on_drag: bool,
}

fn default_snap_on_drag() -> bool {
    true
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            snap_threshold: SNAP_THRESHOLD,
            piece_size: Vec2::new(PIECE_WIDTH, PIECE_HEIGHT),
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            snap_on_drag: default_snap_on_drag(),
        }
    }
}

impl PuzzleConfig {
    /// Largest centre-to-centre distance at which two pieces can still bond.
    ///
    /// Sockets sit on the right edge of a cation and plugs on the left edge of
    /// an anion, so any bonded pair is within one piece diagonal plus the
    /// snap threshold.
    pub fn bond_reach(&self) -> f32 {
        self.piece_size.mag() + self.snap_threshold
    }

    pub fn spawn_point(&self, polarity: crate::ions::Polarity) -> Vec2 {
        let frac = match polarity {
            crate::ions::Polarity::Cation => CATION_SPAWN_X_FRAC,
            crate::ions::Polarity::Anion => ANION_SPAWN_X_FRAC,
        };
        Vec2::new(self.board_width * frac, self.board_height / 2.0)
    }
}
