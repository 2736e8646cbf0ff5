// Bonding pass tests: connector matching, reservation and symmetry

use super::bonding::{apply_bonds, bonds_from_links, compute_bonds, compute_bonds_for, Bond};
use crate::config::PuzzleConfig;
use crate::ions::ION_REGISTRY;
use crate::piece::PlacedIon;
use crate::store::PieceStore;
use ultraviolet::Vec2;

#[cfg(test)]
mod proximity {
    use super::*;

    fn piece(symbol: &str, x: f32, y: f32) -> PlacedIon {
        PlacedIon::new(
            ION_REGISTRY.lookup(symbol).unwrap(),
            Vec2::new(x, y),
            PuzzleConfig::default().piece_size,
        )
    }

    #[test]
    fn adjacent_pair_bonds_once() {
        let config = PuzzleConfig::default();
        let na = piece("Na", 100.0, 100.0);
        let cl = piece("Cl", 220.0, 100.0);
        let bonds = compute_bonds(&[na.clone(), cl.clone()], &config);
        assert_eq!(
            bonds,
            vec![Bond { cation: na.id, anion: cl.id, socket: 0, plug: 0 }]
        );
    }

    #[test]
    fn threshold_is_strict() {
        let config = PuzzleConfig::default();
        let na = piece("Na", 100.0, 100.0);
        let at_threshold = piece("Cl", 220.0, 130.0);
        assert!(compute_bonds(&[na.clone(), at_threshold], &config).is_empty());
        let inside = piece("Cl", 220.0, 129.5);
        assert_eq!(compute_bonds(&[na, inside], &config).len(), 1);
    }

    #[test]
    fn distant_pieces_do_not_bond() {
        let config = PuzzleConfig::default();
        let pieces = [piece("Na", 100.0, 100.0), piece("Cl", 600.0, 250.0)];
        assert!(compute_bonds(&pieces, &config).is_empty());
    }

    #[test]
    fn same_polarity_never_bonds() {
        let config = PuzzleConfig::default();
        let pieces = [piece("Na", 100.0, 100.0), piece("Ba", 220.0, 100.0)];
        assert!(compute_bonds(&pieces, &config).is_empty());
    }

    #[test]
    fn matching_charges_bond_index_to_index() {
        let config = PuzzleConfig::default();
        let al = piece("Al", 100.0, 100.0);
        let po4 = piece("PO4", 220.0, 100.0);
        let bonds = compute_bonds(&[al, po4], &config);
        let pairs: Vec<(usize, usize)> = bonds.iter().map(|b| (b.socket, b.plug)).collect();
        assert_eq!(pairs, vec![(0, 0), (1, 1), (2, 2)]);
    }

    #[test]
    fn a_plug_is_used_at_most_once() {
        // Al sockets at y = 80, 100, 120; the single Cl plug at y = 100 is
        // within range of all three but may only take the first.
        let config = PuzzleConfig::default();
        let al = piece("Al", 100.0, 100.0);
        let cl = piece("Cl", 220.0, 100.0);
        let bonds = compute_bonds(&[al, cl], &config);
        assert_eq!(bonds.len(), 1);
        assert_eq!((bonds[0].socket, bonds[0].plug), (0, 0));
    }

    #[test]
    fn a_socket_is_used_at_most_once_across_partners() {
        let config = PuzzleConfig::default();
        let na = piece("Na", 100.0, 100.0);
        let first = piece("Cl", 220.0, 105.0);
        let second = piece("Cl", 220.0, 95.0);
        let bonds = compute_bonds(&[na.clone(), first.clone(), second], &config);
        assert_eq!(bonds.len(), 1);
        assert_eq!(bonds[0].anion, first.id, "store order decides the tie");
    }

    #[test]
    fn applied_bonds_are_symmetric() {
        let config = PuzzleConfig::default();
        let mut store = PieceStore::new();
        store.insert(piece("Ba", 100.0, 100.0));
        store.insert(piece("Cl", 220.0, 86.0));
        store.insert(piece("Cl", 220.0, 114.0));
        let bonds = compute_bonds(store.as_slice(), &config);
        assert_eq!(bonds.len(), 2);
        apply_bonds(&mut store, &bonds);

        for p in store.iter() {
            for link in &p.bonds {
                let partner = store.get(link.partner).unwrap();
                assert!(partner.bonds.iter().any(|back| back.partner == p.id
                    && back.local_index == link.partner_index
                    && back.partner_index == link.local_index));
            }
        }
        assert_eq!(bonds_from_links(store.as_slice()), bonds);
    }

    #[test]
    fn live_pass_keeps_reserved_connectors() {
        let config = PuzzleConfig::default();
        let mut store = PieceStore::new();
        let na = store.insert(piece("Na", 100.0, 100.0));
        let cl = store.insert(piece("Cl", 220.0, 100.0));
        let bonds = compute_bonds(store.as_slice(), &config);
        apply_bonds(&mut store, &bonds);

        // A second sodium dragged onto the same chloride plug cannot take it.
        let dragged = store.insert(piece("Na", 100.0, 105.0));
        let live = compute_bonds_for(store.as_slice(), dragged, &config);
        assert_eq!(
            live,
            vec![Bond { cation: na, anion: cl, socket: 0, plug: 0 }]
        );
    }

    #[test]
    fn links_to_removed_pieces_are_dropped() {
        let config = PuzzleConfig::default();
        let mut store = PieceStore::new();
        store.insert(piece("Na", 100.0, 100.0));
        let cl = store.insert(piece("Cl", 220.0, 100.0));
        let bonds = compute_bonds(store.as_slice(), &config);
        apply_bonds(&mut store, &bonds);
        store.remove(cl).unwrap();
        assert!(bonds_from_links(store.as_slice()).is_empty());
    }
}
