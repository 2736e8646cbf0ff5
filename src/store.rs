// store.rs
// Piece store: owns every placed ion, in insertion order, plus a separate draw order

use ultraviolet::Vec2;

use crate::error::PuzzleError;
use crate::piece::{PieceId, PlacedIon};

/// Insertion order drives bonding and traversal, so formulas stay
/// deterministic. Draw order (back to front) only affects hit testing.
#[derive(Clone, Debug, Default)]
pub struct PieceStore {
    pieces: Vec<PlacedIon>,
    draw_order: Vec<PieceId>,
}

impl PieceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn insert(&mut self, piece: PlacedIon) -> PieceId {
        let id = piece.id;
        self.pieces.push(piece);
        self.draw_order.push(id);
        id
    }

    pub fn index_of(&self, id: PieceId) -> Option<usize> {
        self.pieces.iter().position(|p| p.id == id)
    }

    pub fn get(&self, id: PieceId) -> Option<&PlacedIon> {
        self.pieces.iter().find(|p| p.id == id)
    }

    pub fn get_mut(&mut self, id: PieceId) -> Option<&mut PlacedIon> {
        self.pieces.iter_mut().find(|p| p.id == id)
    }

    pub fn require(&self, id: PieceId) -> Result<&PlacedIon, PuzzleError> {
        self.get(id).ok_or(PuzzleError::NotFound(id))
    }

    pub fn require_mut(&mut self, id: PieceId) -> Result<&mut PlacedIon, PuzzleError> {
        self.get_mut(id).ok_or(PuzzleError::NotFound(id))
    }

    /// Remove a piece. Bond links pointing at it become stale until the next
    /// bonding pass rebuilds them.
    pub fn remove(&mut self, id: PieceId) -> Result<PlacedIon, PuzzleError> {
        let idx = self.index_of(id).ok_or(PuzzleError::NotFound(id))?;
        self.draw_order.retain(|&other| other != id);
        Ok(self.pieces.remove(idx))
    }

    pub fn clear(&mut self) {
        self.pieces.clear();
        self.draw_order.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlacedIon> {
        self.pieces.iter()
    }

    pub fn as_slice(&self) -> &[PlacedIon] {
        &self.pieces
    }

    pub fn ids(&self) -> Vec<PieceId> {
        self.pieces.iter().map(|p| p.id).collect()
    }

    /// Piece ids from back to front.
    pub fn draw_order(&self) -> &[PieceId] {
        &self.draw_order
    }

    pub fn bring_to_front(&mut self, id: PieceId) -> Result<(), PuzzleError> {
        let pos = self
            .draw_order
            .iter()
            .position(|&other| other == id)
            .ok_or(PuzzleError::NotFound(id))?;
        let id = self.draw_order.remove(pos);
        self.draw_order.push(id);
        Ok(())
    }

    /// Topmost piece whose bounding box contains `point`.
    pub fn topmost_at(&self, point: Vec2) -> Option<PieceId> {
        self.draw_order
            .iter()
            .rev()
            .copied()
            .find(|&id| self.get(id).map_or(false, |p| p.contains_point(point)))
    }

    pub fn translate(&mut self, id: PieceId, delta: Vec2) -> Result<(), PuzzleError> {
        let piece = self.require_mut(id)?;
        piece.pos += delta;
        Ok(())
    }

    pub fn clear_bonds(&mut self) {
        for piece in &mut self.pieces {
            piece.bonds.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ions::ION_REGISTRY;

    fn piece(symbol: &str, x: f32, y: f32) -> PlacedIon {
        PlacedIon::new(
            ION_REGISTRY.lookup(symbol).unwrap(),
            Vec2::new(x, y),
            Vec2::new(120.0, 80.0),
        )
    }

    #[test]
    fn insertion_order_is_kept_after_bring_to_front() {
        let mut store = PieceStore::new();
        let a = store.insert(piece("Na", 0.0, 0.0));
        let b = store.insert(piece("Cl", 10.0, 0.0));
        store.bring_to_front(a).unwrap();
        assert_eq!(store.ids(), vec![a, b]);
        assert_eq!(store.draw_order(), &[b, a]);
    }

    #[test]
    fn topmost_piece_wins_hit_test() {
        let mut store = PieceStore::new();
        let a = store.insert(piece("Na", 0.0, 0.0));
        let b = store.insert(piece("Cl", 10.0, 0.0));
        assert_eq!(store.topmost_at(Vec2::new(5.0, 0.0)), Some(b));
        store.bring_to_front(a).unwrap();
        assert_eq!(store.topmost_at(Vec2::new(5.0, 0.0)), Some(a));
        assert_eq!(store.topmost_at(Vec2::new(500.0, 0.0)), None);
    }

    #[test]
    fn removing_unknown_piece_leaves_store_unchanged() {
        let mut store = PieceStore::new();
        let a = store.insert(piece("Na", 0.0, 0.0));
        assert!(matches!(store.remove(a + 1000), Err(PuzzleError::NotFound(_))));
        assert_eq!(store.len(), 1);
        store.remove(a).unwrap();
        assert!(store.is_empty());
        assert!(store.draw_order().is_empty());
    }
}
