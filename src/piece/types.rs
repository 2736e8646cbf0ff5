// piece/types.rs
// Contains the PlacedIon struct, its bond links and id allocation

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use smallvec::SmallVec;
use ultraviolet::Vec2;

use crate::ions::{IonDefinition, Polarity};

/// Identifier of a piece on the board, stable for the piece's lifetime.
pub type PieceId = u64;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// One side of a bond as seen from the owning piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BondLink {
    pub partner: PieceId,
    /// Connector index on the owning piece
    pub local_index: usize,
    /// Connector index on the partner piece
    pub partner_index: usize,
}

#[derive(Clone, Debug)]
pub struct PlacedIon {
    pub id: PieceId,
    pub definition: Arc<IonDefinition>,
    /// Centre of the piece in board coordinates
    pub pos: Vec2,
    /// Width and height of the bounding box
    pub size: Vec2,
    /// Rebuilt on every bonding pass; never edited in place.
    pub bonds: SmallVec<[BondLink; 4]>,
}

impl PlacedIon {
    pub fn new(definition: Arc<IonDefinition>, pos: Vec2, size: Vec2) -> Self {
        Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            definition,
            pos,
            size,
            bonds: SmallVec::new(),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.definition.symbol
    }

    pub fn polarity(&self) -> Polarity {
        self.definition.polarity
    }

    pub fn charge(&self) -> u32 {
        self.definition.charge_magnitude
    }

    pub fn is_cation(&self) -> bool {
        self.definition.is_cation()
    }

    pub fn is_anion(&self) -> bool {
        self.definition.is_anion()
    }

    pub fn is_bonded(&self) -> bool {
        !self.bonds.is_empty()
    }

    /// Distinct bonded partners, in bond order.
    pub fn partners(&self) -> impl Iterator<Item = PieceId> + '_ {
        self.bonds
            .iter()
            .enumerate()
            .filter(|(i, link)| !self.bonds[..*i].iter().any(|prev| prev.partner == link.partner))
            .map(|(_, link)| link.partner)
    }

    pub fn is_bonded_to(&self, other: PieceId) -> bool {
        self.bonds.iter().any(|link| link.partner == other)
    }

    /// Top-left and bottom-right corners of the bounding box.
    pub fn bounds(&self) -> (Vec2, Vec2) {
        let half = self.size * 0.5;
        (self.pos - half, self.pos + half)
    }

    /// Hit test against the axis-aligned bounding box (edges inclusive).
    pub fn contains_point(&self, point: Vec2) -> bool {
        let (min, max) = self.bounds();
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }
}
