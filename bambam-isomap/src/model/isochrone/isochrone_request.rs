use serde::Serialize;

use crate::model::coordinate::{coordinate_ops, Position};

use super::TimeBudget;

/// JSON body of a single-origin, single-range isochrone request.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct IsochroneRequest {
    pub id: String,
    /// origins in service order, [lon, lat]
    pub locations: Vec<[f64; 2]>,
    pub location_type: String,
    /// range values in seconds
    pub range: Vec<u32>,
    pub range_type: String,
    pub units: String,
    pub options: RouteOptions,
    pub area_units: String,
    pub intersections: bool,
    pub attributes: Vec<String>,
    pub interval: u32,
    pub smoothing: u32,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RouteOptions {
    pub avoid_borders: String,
}

impl IsochroneRequest {
    pub fn new(id: &str, origin: &Position, time_budget: TimeBudget) -> IsochroneRequest {
        let seconds = time_budget.seconds();
        IsochroneRequest {
            id: id.to_string(),
            locations: vec![coordinate_ops::to_service_order(origin)],
            location_type: String::from("start"),
            range: vec![seconds],
            range_type: String::from("time"),
            units: String::from("m"),
            options: RouteOptions {
                avoid_borders: String::from("controlled"),
            },
            area_units: String::from("m"),
            intersections: false,
            attributes: vec![String::from("area")],
            interval: seconds,
            smoothing: 0,
        }
    }
}
