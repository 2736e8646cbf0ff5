// puzzle/puzzle.rs
// Contains the Puzzle struct: owns the piece store and reruns bonding, partitioning and formula synthesis

use std::sync::Arc;

use log::{debug, info, warn};
use ultraviolet::Vec2;

use super::bonding::{self, Bond, Snap};
use crate::config::PuzzleConfig;
use crate::error::PuzzleError;
use crate::formula::{self, BoardResult};
use crate::grading::{FormulaWhitelist, GradeReport};
use crate::ions::{IonDefinition, IonRegistry, ION_REGISTRY};
use crate::partition;
use crate::piece::{PieceId, PlacedIon};
use crate::store::PieceStore;

#[derive(Clone, Copy, Debug, PartialEq)]
struct DragState {
    piece: PieceId,
    /// Pointer position relative to the piece centre at pick time
    grab_offset: Vec2,
}

/// The puzzle board and its derived state.
///
/// Every mutating operation recomputes bonds, compounds and formulas from
/// scratch over the whole store; [`Puzzle::current_result`] is a pure read.
pub struct Puzzle {
    store: PieceStore,
    registry: IonRegistry,
    config: PuzzleConfig,
    bonds: Vec<Bond>,
    result: BoardResult,
    drag: Option<DragState>,
    whitelist: Option<FormulaWhitelist>,
}

impl Default for Puzzle {
    fn default() -> Self {
        Self::new()
    }
}

impl Puzzle {
    pub fn new() -> Self {
        Self::with_registry(ION_REGISTRY.clone(), PuzzleConfig::default())
    }

    pub fn with_config(config: PuzzleConfig) -> Self {
        Self::with_registry(ION_REGISTRY.clone(), config)
    }

    pub fn with_registry(registry: IonRegistry, config: PuzzleConfig) -> Self {
        Self {
            store: PieceStore::new(),
            registry,
            config,
            bonds: Vec::new(),
            result: BoardResult::default(),
            drag: None,
            whitelist: None,
        }
    }

    pub fn set_whitelist(&mut self, whitelist: Option<FormulaWhitelist>) {
        self.whitelist = whitelist;
    }

    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    pub fn registry(&self) -> &IonRegistry {
        &self.registry
    }

    pub fn definitions(&self) -> &[Arc<IonDefinition>] {
        self.registry.definitions()
    }

    pub fn pieces(&self) -> &[PlacedIon] {
        self.store.as_slice()
    }

    pub fn piece(&self, id: PieceId) -> Option<&PlacedIon> {
        self.store.get(id)
    }

    pub fn store(&self) -> &PieceStore {
        &self.store
    }

    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    pub fn current_result(&self) -> &BoardResult {
        &self.result
    }

    /// Grading verdict for the last result, when a whitelist is configured.
    pub fn graded_result(&self) -> Option<GradeReport> {
        self.whitelist.as_ref().map(|w| w.grade(&self.result))
    }

    pub fn dragging(&self) -> Option<PieceId> {
        self.drag.map(|d| d.piece)
    }

    pub fn add_piece(&mut self, symbol: &str, position: Vec2) -> Result<PieceId, PuzzleError> {
        let definition = self.registry.lookup(symbol).map_err(|err| {
            warn!("Rejected add of unknown ion {}", symbol);
            err
        })?;
        let piece = PlacedIon::new(definition, position, self.config.piece_size);
        let id = self.store.insert(piece);
        debug!("Added {} as piece {} at ({}, {})", symbol, id, position.x, position.y);
        self.recompute();
        Ok(id)
    }

    /// Place a piece at the default spawn point for its polarity.
    pub fn add_piece_at_spawn(&mut self, symbol: &str) -> Result<PieceId, PuzzleError> {
        let definition = self.registry.lookup(symbol)?;
        let position = self.config.spawn_point(definition.polarity);
        self.add_piece(symbol, position)
    }

    pub fn move_piece(&mut self, id: PieceId, position: Vec2) -> Result<(), PuzzleError> {
        self.store.require_mut(id)?.pos = position;
        self.recompute();
        Ok(())
    }

    /// Translate the piece and everything bonded to it.
    pub fn move_group(&mut self, id: PieceId, delta: Vec2) -> Result<(), PuzzleError> {
        let start = self.store.index_of(id).ok_or(PuzzleError::NotFound(id))?;
        let members: Vec<PieceId> = partition::component_of(self.store.as_slice(), start)
            .into_iter()
            .map(|idx| self.store.as_slice()[idx].id)
            .collect();
        for member in &members {
            self.store.translate(*member, delta)?;
        }
        debug!("Moved group of {} pieces anchored at {}", members.len(), id);
        self.recompute();
        Ok(())
    }

    pub fn remove_piece(&mut self, id: PieceId) -> Result<(), PuzzleError> {
        self.store.remove(id)?;
        if self.dragging() == Some(id) {
            self.drag = None;
        }
        debug!("Removed piece {}", id);
        self.recompute();
        Ok(())
    }

    pub fn clear_all(&mut self) {
        info!("Clearing board of {} pieces", self.store.len());
        self.store.clear();
        self.drag = None;
        self.recompute();
    }

    /// Pick the topmost piece under `point` and bring it to the front.
    /// Any drag still in progress is released first.
    pub fn begin_drag(&mut self, point: Vec2) -> Option<PieceId> {
        self.end_drag();
        let id = self.store.topmost_at(point)?;
        let grab_offset = point - self.store.get(id)?.pos;
        self.store.bring_to_front(id).ok()?;
        self.drag = Some(DragState { piece: id, grab_offset });
        debug!("Picked piece {}", id);
        Some(id)
    }

    /// Move the dragged piece under the pointer and run the live bonding pass.
    /// While the piece holds a bond it is pulled onto that connector; returns
    /// the snap when one was applied.
    pub fn drag_to(&mut self, point: Vec2) -> Option<Snap> {
        let drag = self.drag?;
        let focus = drag.piece;
        self.store.get_mut(focus)?.pos = point - drag.grab_offset;
        self.recompute_live(focus);

        let snap = self.snap_held_bond(focus);
        if snap.is_some() {
            self.recompute_live(focus);
        }
        snap
    }

    /// Release the dragged piece: snap it onto its held connector, then let
    /// the full pass decide the final bonds.
    pub fn end_drag(&mut self) {
        if let Some(drag) = self.drag.take() {
            self.snap_held_bond(drag.piece);
            debug!("Released piece {}", drag.piece);
            self.recompute();
        }
    }

    fn snap_held_bond(&mut self, focus: PieceId) -> Option<Snap> {
        if !self.config.snap_on_drag {
            return None;
        }
        let bond = self.bonds.iter().find(|bond| bond.involves(focus)).copied()?;
        let delta = bonding::snap_delta(&self.store, focus, &bond)?;
        if delta == Vec2::zero() {
            return None;
        }
        self.store.translate(focus, delta).ok()?;
        let partner = bond.partner_of(focus)?;
        debug!("Snapped piece {} onto {} by ({}, {})", focus, partner, delta.x, delta.y);
        Some(Snap {
            piece: focus,
            partner,
            delta,
        })
    }

    /// Full pass: bonds from scratch, then compounds and formulas.
    pub fn recompute(&mut self) {
        let bonds = bonding::compute_bonds(self.store.as_slice(), &self.config);
        self.publish(bonds);
    }

    fn recompute_live(&mut self, focus: PieceId) {
        let bonds = bonding::compute_bonds_for(self.store.as_slice(), focus, &self.config);
        self.publish(bonds);
    }

    fn publish(&mut self, bonds: Vec<Bond>) {
        bonding::apply_bonds(&mut self.store, &bonds);
        self.bonds = bonds;
        self.result = formula::evaluate(self.store.as_slice());
        debug!(
            "{} bonds, {} compounds: {}",
            self.bonds.len(),
            self.result.compounds.len(),
            self.result.display_text
        );
    }
}
