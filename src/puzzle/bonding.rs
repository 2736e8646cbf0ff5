// puzzle/bonding.rs
// Proximity connector: decides which sockets and plugs are close enough to bond

use std::collections::HashSet;

use ultraviolet::Vec2;

use crate::cell_list::CellList;
use crate::config::{self, PuzzleConfig};
use crate::piece::{BondLink, PieceId, PlacedIon};
use crate::store::PieceStore;

/// A bond between cation socket `socket` and anion plug `plug`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bond {
    pub cation: PieceId,
    pub anion: PieceId,
    pub socket: usize,
    pub plug: usize,
}

impl Bond {
    pub fn involves(&self, id: PieceId) -> bool {
        self.cation == id || self.anion == id
    }

    pub fn partner_of(&self, id: PieceId) -> Option<PieceId> {
        if self.cation == id {
            Some(self.anion)
        } else if self.anion == id {
            Some(self.cation)
        } else {
            None
        }
    }
}

/// Result of snapping the dragged piece onto the connector it is bonded to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Snap {
    pub piece: PieceId,
    pub partner: PieceId,
    pub delta: Vec2,
}

/// Connectors already taken in the current pass, keyed by (piece, index).
type UsedConnectors = HashSet<(PieceId, usize)>;

/// Full pass: recompute every bond on the board from piece positions alone.
pub fn compute_bonds(pieces: &[PlacedIon], config: &PuzzleConfig) -> Vec<Bond> {
    let mut used = UsedConnectors::new();
    scan(pieces, config, None, &mut used)
}

/// Live pass for a dragged piece: bonds between other pieces are kept as they
/// are and their connectors stay reserved; only pairs involving `focus` are
/// rescanned.
pub fn compute_bonds_for(pieces: &[PlacedIon], focus: PieceId, config: &PuzzleConfig) -> Vec<Bond> {
    let mut bonds: Vec<Bond> = bonds_from_links(pieces)
        .into_iter()
        .filter(|bond| !bond.involves(focus))
        .collect();
    let mut used: UsedConnectors = bonds
        .iter()
        .flat_map(|bond| [(bond.cation, bond.socket), (bond.anion, bond.plug)])
        .collect();
    bonds.extend(scan(pieces, config, Some(focus), &mut used));
    bonds
}

fn scan(
    pieces: &[PlacedIon],
    config: &PuzzleConfig,
    focus: Option<PieceId>,
    used: &mut UsedConnectors,
) -> Vec<Bond> {
    let reach = config.bond_reach();
    // The grid spans the board plus one reach on every side.
    let margin = Vec2::broadcast(reach);
    let board = Vec2::new(config.board_width, config.board_height);
    let mut cells = CellList::new(-margin, board + margin, config::CELL_SIZE);
    cells.rebuild(pieces);

    let mut bonds = Vec::new();
    for (ci, cation) in pieces.iter().enumerate() {
        if !cation.is_cation() {
            continue;
        }
        for ai in cells.find_neighbors_within(pieces, ci, reach) {
            let anion = &pieces[ai];
            if !anion.is_anion() {
                continue;
            }
            if let Some(focus) = focus {
                if cation.id != focus && anion.id != focus {
                    continue;
                }
            }
            connect_pair(cation, anion, config.snap_threshold, used, &mut bonds);
        }
    }
    bonds
}

/// Each socket takes the first free plug within range, scanning plugs in
/// ascending index order.
fn connect_pair(
    cation: &PlacedIon,
    anion: &PlacedIon,
    threshold: f32,
    used: &mut UsedConnectors,
    bonds: &mut Vec<Bond>,
) {
    for socket in 0..cation.connector_count() {
        if used.contains(&(cation.id, socket)) {
            continue;
        }
        let socket_pos = cation.pos + cation.connector_offset(socket);
        for plug in 0..anion.connector_count() {
            if used.contains(&(anion.id, plug)) {
                continue;
            }
            let plug_pos = anion.pos + anion.connector_offset(plug);
            if (socket_pos - plug_pos).mag() < threshold {
                used.insert((cation.id, socket));
                used.insert((anion.id, plug));
                bonds.push(Bond {
                    cation: cation.id,
                    anion: anion.id,
                    socket,
                    plug,
                });
                break;
            }
        }
    }
}

/// Replace every piece's bond links with the given bond set.
pub fn apply_bonds(store: &mut PieceStore, bonds: &[Bond]) {
    store.clear_bonds();
    for bond in bonds {
        if let Some(cation) = store.get_mut(bond.cation) {
            cation.bonds.push(BondLink {
                partner: bond.anion,
                local_index: bond.socket,
                partner_index: bond.plug,
            });
        }
        if let Some(anion) = store.get_mut(bond.anion) {
            anion.bonds.push(BondLink {
                partner: bond.cation,
                local_index: bond.plug,
                partner_index: bond.socket,
            });
        }
    }
}

/// Reconstruct the bond set from the cation side of the stored links.
/// Links to pieces that are no longer present are dropped.
pub fn bonds_from_links(pieces: &[PlacedIon]) -> Vec<Bond> {
    let present: HashSet<PieceId> = pieces.iter().map(|p| p.id).collect();
    pieces
        .iter()
        .filter(|p| p.is_cation())
        .flat_map(|cation| {
            cation.bonds.iter().map(move |link| Bond {
                cation: cation.id,
                anion: link.partner,
                socket: link.local_index,
                plug: link.partner_index,
            })
        })
        .filter(|bond| present.contains(&bond.anion))
        .collect()
}

/// Translation that puts the focus piece's connector exactly on its partner's.
pub fn snap_delta(store: &PieceStore, focus: PieceId, bond: &Bond) -> Option<Vec2> {
    let cation = store.get(bond.cation)?;
    let anion = store.get(bond.anion)?;
    let socket_pos = cation.connector_point(bond.socket)?;
    let plug_pos = anion.connector_point(bond.plug)?;
    if focus == bond.cation {
        Some(plug_pos - socket_pos)
    } else if focus == bond.anion {
        Some(socket_pos - plug_pos)
    } else {
        None
    }
}
