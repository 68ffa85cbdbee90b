use std::future::Future;

use crate::model::coordinate::Position;

use super::{IsochroneError, IsochronePolygon, TimeBudget, TravelMode};

/// anything that can produce the reachable-area polygon for an origin, travel mode
/// and time budget. the HTTP [`super::IsochroneClient`] is the production source.
pub trait IsochroneSource {
    fn fetch_isochrone(
        &self,
        position: Position,
        mode: TravelMode,
        time_budget: TimeBudget,
    ) -> impl Future<Output = Result<IsochronePolygon, IsochroneError>> + Send;
}
