// piece/connector.rs
// Connector point geometry: sockets on the right edge of cations, plugs on the left edge of anions

use ultraviolet::Vec2;

use super::PlacedIon;
use crate::ions::Polarity;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectorKind {
    Socket,
    Plug,
}

impl From<Polarity> for ConnectorKind {
    fn from(polarity: Polarity) -> Self {
        match polarity {
            Polarity::Cation => ConnectorKind::Socket,
            Polarity::Anion => ConnectorKind::Plug,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConnectorPoint {
    pub kind: ConnectorKind,
    pub index: usize,
    pub pos: Vec2,
}

/// Offset of connector `index` from the centre of a piece of the given size.
///
/// Points are spaced `height / (charge + 1)` apart, starting one interval
/// below the top edge.
pub fn connector_offset(polarity: Polarity, size: Vec2, charge: u32, index: usize) -> Vec2 {
    let spacing = size.y / (charge as f32 + 1.0);
    let dy = -size.y * 0.5 + spacing * (index as f32 + 1.0);
    let dx = match polarity {
        Polarity::Cation => size.x * 0.5,
        Polarity::Anion => -size.x * 0.5,
    };
    Vec2::new(dx, dy)
}

impl PlacedIon {
    pub fn connector_kind(&self) -> ConnectorKind {
        self.polarity().into()
    }

    pub fn connector_count(&self) -> usize {
        self.charge() as usize
    }

    pub fn connector_offset(&self, index: usize) -> Vec2 {
        connector_offset(self.polarity(), self.size, self.charge(), index)
    }

    /// Board position of connector `index`, or `None` past the last connector.
    pub fn connector_point(&self, index: usize) -> Option<Vec2> {
        (index < self.connector_count()).then(|| self.pos + self.connector_offset(index))
    }

    pub fn connector_points(&self) -> impl Iterator<Item = ConnectorPoint> + '_ {
        let kind = self.connector_kind();
        (0..self.connector_count()).map(move |index| ConnectorPoint {
            kind,
            index,
            pos: self.pos + self.connector_offset(index),
        })
    }
}
