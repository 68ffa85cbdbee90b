use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::CoordinateError;

/// a user-facing (latitude, longitude) pair. construction validates that both values
/// are finite and within geographic range, so any `Position` in hand is safe to send
/// to the isochrone service.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(try_from = "LatLon", into = "LatLon")]
pub struct Position {
    lat: f64,
    lon: f64,
}

/// unvalidated serde form of a [`Position`]
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
struct LatLon {
    lat: f64,
    lon: f64,
}

impl Position {
    pub fn new(lat: f64, lon: f64) -> Result<Position, CoordinateError> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(CoordinateError::NonFinite { lat, lon });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CoordinateError::LatitudeOutOfRange(lat));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(CoordinateError::LongitudeOutOfRange(lon));
        }
        Ok(Position { lat, lon })
    }

    /// skips validation, for built-in constants only
    pub(crate) const fn new_unchecked(lat: f64, lon: f64) -> Position {
        Position { lat, lon }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}

impl TryFrom<LatLon> for Position {
    type Error = CoordinateError;

    fn try_from(value: LatLon) -> Result<Self, Self::Error> {
        Position::new(value.lat, value.lon)
    }
}

impl From<Position> for LatLon {
    fn from(value: Position) -> Self {
        LatLon {
            lat: value.lat,
            lon: value.lon,
        }
    }
}

/// geo types are x/y, which is longitude/latitude
impl From<&Position> for geo::Coord<f64> {
    fn from(value: &Position) -> Self {
        geo::coord! { x: value.lon, y: value.lat }
    }
}

impl From<&Position> for geo::Point<f64> {
    fn from(value: &Position) -> Self {
        geo::Point::new(value.lon, value.lat)
    }
}

impl TryFrom<geo::Coord<f64>> for Position {
    type Error = CoordinateError;

    fn try_from(value: geo::Coord<f64>) -> Result<Self, Self::Error> {
        Position::new(value.y, value.x)
    }
}
