//! in-memory isochrone sources for tests.

use std::{collections::HashMap, sync::Mutex};

use tokio::sync::oneshot;

use crate::model::coordinate::{coordinate_ops, Position};

use super::{IsochroneError, IsochronePolygon, IsochroneSource, TimeBudget, TravelMode};

type Gate = oneshot::Receiver<Result<IsochronePolygon, IsochroneError>>;

/// a square ring with its south-west corner at (lat, lon), in user order
pub fn square(lat: f64, lon: f64, size: f64) -> IsochronePolygon {
    coordinate_ops::to_user_order(&[
        vec![lon, lat],
        vec![lon + size, lat],
        vec![lon + size, lat + size],
        vec![lon, lat + size],
        vec![lon, lat],
    ])
    .expect("test square should be valid")
}

/// answers every request right away with the same result, recording each call
pub struct FixedSource {
    result: Result<IsochronePolygon, IsochroneError>,
    pub calls: Mutex<Vec<(Position, TravelMode, TimeBudget)>>,
}

impl FixedSource {
    pub fn new(result: Result<IsochronePolygon, IsochroneError>) -> FixedSource {
        FixedSource {
            result,
            calls: Mutex::new(vec![]),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, position: Position, mode: TravelMode, time_budget: TimeBudget) {
        self.calls
            .lock()
            .unwrap()
            .push((position, mode, time_budget));
    }
}

impl IsochroneSource for FixedSource {
    async fn fetch_isochrone(
        &self,
        position: Position,
        mode: TravelMode,
        time_budget: TimeBudget,
    ) -> Result<IsochronePolygon, IsochroneError> {
        self.record(position, mode, time_budget);
        self.result.clone()
    }
}

/// holds each response back until the test releases it through the sender
/// returned by [`GatedSource::gate`]. requests are matched to gates by origin.
#[derive(Default)]
pub struct GatedSource {
    gates: Mutex<HashMap<String, Gate>>,
}

impl GatedSource {
    pub fn gate(
        &self,
        position: &Position,
    ) -> oneshot::Sender<Result<IsochronePolygon, IsochroneError>> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(position.to_string(), rx);
        tx
    }

    fn take_gate(&self, position: &Position) -> Option<Gate> {
        self.gates.lock().unwrap().remove(&position.to_string())
    }
}

impl IsochroneSource for GatedSource {
    async fn fetch_isochrone(
        &self,
        position: Position,
        _mode: TravelMode,
        _time_budget: TimeBudget,
    ) -> Result<IsochronePolygon, IsochroneError> {
        let gate = self.take_gate(&position).ok_or_else(|| {
            IsochroneError::NetworkFailure(format!("no gate registered for {position}"))
        })?;
        gate.await.unwrap_or_else(|_| {
            Err(IsochroneError::NetworkFailure(String::from(
                "gate dropped before release",
            )))
        })
    }
}
