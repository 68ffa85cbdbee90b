use crate::model::{
    coordinate::Position,
    isochrone::{IsochronePolygon, TimeBudget, TravelMode},
    sampling::SampledListing,
};

/// a reachable-area polygon together with the points sampled from it. both halves
/// come from the same completed request.
#[derive(Clone, Debug, PartialEq)]
pub struct IsochroneOverlay {
    /// sequence number of the refresh that produced this overlay
    pub sequence: u64,
    pub polygon: IsochronePolygon,
    pub listings: Vec<SampledListing>,
}

/// everything the presentation layer draws: the marker, the selected controls,
/// the loading indicator and the overlay.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderState {
    pub position: Position,
    pub mode: TravelMode,
    pub time_budget: TimeBudget,
    /// number of refreshes awaiting a network response
    pub in_flight: usize,
    pub overlay: Option<IsochroneOverlay>,
}

impl RenderState {
    pub fn new(position: Position, mode: TravelMode, time_budget: TimeBudget) -> RenderState {
        RenderState {
            position,
            mode,
            time_budget,
            in_flight: 0,
            overlay: None,
        }
    }

    pub fn busy(&self) -> bool {
        self.in_flight > 0
    }
}
