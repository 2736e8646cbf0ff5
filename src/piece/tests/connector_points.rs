#[cfg(test)]
mod geometry {
    use crate::config;
    use crate::ions::ION_REGISTRY;
    use crate::piece::{ConnectorKind, PlacedIon};
    use ultraviolet::Vec2;

    fn piece(symbol: &str, pos: Vec2) -> PlacedIon {
        let size = Vec2::new(config::PIECE_WIDTH, config::PIECE_HEIGHT);
        PlacedIon::new(ION_REGISTRY.lookup(symbol).unwrap(), pos, size)
    }

    #[test]
    fn cation_sockets_sit_on_right_edge() {
        let al = piece("Al", Vec2::new(100.0, 100.0));
        let points: Vec<_> = al.connector_points().collect();
        assert_eq!(points.len(), 3);
        for (i, p) in points.iter().enumerate() {
            assert_eq!(p.kind, ConnectorKind::Socket);
            assert_eq!(p.index, i);
            assert_eq!(p.pos.x, 160.0);
        }
        // 80 / 4 = 20 unit spacing starting at the top edge (y = 60)
        assert_eq!(points[0].pos.y, 80.0);
        assert_eq!(points[1].pos.y, 100.0);
        assert_eq!(points[2].pos.y, 120.0);
    }

    #[test]
    fn anion_plugs_sit_on_left_edge() {
        let co3 = piece("CO3", Vec2::new(300.0, 100.0));
        let points: Vec<_> = co3.connector_points().collect();
        assert_eq!(points.len(), 2);
        assert!(points.iter().all(|p| p.kind == ConnectorKind::Plug && p.pos.x == 240.0));
        let spacing = config::PIECE_HEIGHT / 3.0;
        assert!((points[0].pos.y - (60.0 + spacing)).abs() < 1e-4);
        assert!((points[1].pos.y - (60.0 + 2.0 * spacing)).abs() < 1e-4);
    }

    #[test]
    fn single_charge_connector_is_centred() {
        let na = piece("Na", Vec2::new(0.0, 0.0));
        assert_eq!(na.connector_point(0), Some(Vec2::new(60.0, 0.0)));
        assert_eq!(na.connector_point(1), None);
    }
}
