use geo::{LineString, Polygon};

use crate::model::coordinate::Position;

/// the boundary of a reachable area as an ordered ring of positions in
/// (latitude, longitude) order. the first and last vertex coincide when the
/// service returns a closed ring.
#[derive(Clone, Debug, PartialEq)]
pub struct IsochronePolygon {
    ring: Vec<Position>,
}

impl IsochronePolygon {
    pub fn new(ring: Vec<Position>) -> IsochronePolygon {
        IsochronePolygon { ring }
    }

    pub fn ring(&self) -> &[Position] {
        &self.ring
    }

    pub fn len(&self) -> usize {
        self.ring.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// the polygon as a geo type, x = longitude and y = latitude
    pub fn to_geo(&self) -> Polygon<f64> {
        let exterior = self
            .ring
            .iter()
            .map(geo::Coord::from)
            .collect::<LineString<f64>>();
        Polygon::new(exterior, vec![])
    }
}
