use crate::model::isochrone::IsochronePolygon;

use super::{CoordinateError, Position};

/// writes a position in the isochrone service's (longitude, latitude) order.
pub fn to_service_order(position: &Position) -> [f64; 2] {
    [position.lon(), position.lat()]
}

/// reads a single (longitude, latitude) service coordinate as a position.
pub fn from_service_order(coordinate: [f64; 2]) -> Result<Position, CoordinateError> {
    let [lon, lat] = coordinate;
    Position::new(lat, lon)
}

/// converts a ring of (longitude, latitude) vertices as returned by the isochrone
/// service into a polygon in (latitude, longitude) order. vertices are kept in
/// ring order, including the closing vertex.
///
/// # Arguments
///
/// * `ring` - service-ordered vertices. each vertex must hold at least two numbers;
///            a third (elevation) value is ignored.
///
/// # Returns
///
/// The polygon, or the first vertex that is malformed or out of range
pub fn to_user_order(ring: &[Vec<f64>]) -> Result<IsochronePolygon, CoordinateError> {
    let vertices = ring
        .iter()
        .enumerate()
        .map(|(index, vertex)| match vertex.as_slice() {
            [lon, lat, ..] => from_service_order([*lon, *lat]).map_err(|e| {
                CoordinateError::MalformedVertex {
                    index,
                    msg: e.to_string(),
                }
            }),
            _ => Err(CoordinateError::MalformedVertex {
                index,
                msg: format!("expected [lon, lat], found {vertex:?}"),
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(IsochronePolygon::new(vertices))
}

/// the inverse of [`to_user_order`]
pub fn to_service_ring(polygon: &IsochronePolygon) -> Vec<Vec<f64>> {
    polygon
        .ring()
        .iter()
        .map(|p| to_service_order(p).to_vec())
        .collect()
}
