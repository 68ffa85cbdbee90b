use futures::stream::{FuturesUnordered, StreamExt};
use tokio::sync::mpsc;

use crate::model::{
    coordinate::{CoordinateError, Position},
    isochrone::{IsochroneSource, TimeBudget, TravelMode},
    render_state::{RefreshOutcome, RenderStateModel},
};

use super::{MapView, UiEvent};

/// turns map clicks and control panel changes into refreshes of the render state.
/// the current selection lives in the model; the controller only decides which
/// part of it an interaction replaces.
pub struct LocationSelectionController<S, M> {
    model: RenderStateModel<S>,
    map: M,
}

impl<S, M> LocationSelectionController<S, M>
where
    S: IsochroneSource,
    M: MapView,
{
    pub fn new(model: RenderStateModel<S>, map: M) -> LocationSelectionController<S, M> {
        LocationSelectionController { model, map }
    }

    pub fn model(&self) -> &RenderStateModel<S> {
        &self.model
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    /// centers the map on the default selection and runs the first refresh
    pub async fn mount(&self) -> RefreshOutcome {
        let state = self.model.state();
        self.map.recenter(&state.position);
        self.model
            .refresh(state.position, state.mode, state.time_budget)
            .await
    }

    /// selects the clicked location with the current mode and time budget.
    /// an invalid coordinate is rejected before anything else happens.
    pub async fn on_click(&self, lat: f64, lon: f64) -> Result<RefreshOutcome, CoordinateError> {
        let position = Position::new(lat, lon)?;
        let state = self.model.state();
        self.map.recenter(&position);
        let outcome = self
            .model
            .refresh(position, state.mode, state.time_budget)
            .await;
        Ok(outcome)
    }

    /// re-runs the current location with a new travel mode. ignored while a refresh
    /// is in flight, as the controls are disabled then.
    pub async fn on_mode_change(&self, mode: TravelMode) -> Option<RefreshOutcome> {
        let state = self.model.state();
        if state.busy() {
            log::debug!("ignoring mode change to {mode} while loading");
            return None;
        }
        let outcome = self
            .model
            .refresh(state.position, mode, state.time_budget)
            .await;
        Some(outcome)
    }

    /// re-runs the current location with a new time budget. ignored while a refresh
    /// is in flight.
    pub async fn on_time_budget_change(&self, time_budget: TimeBudget) -> Option<RefreshOutcome> {
        let state = self.model.state();
        if state.busy() {
            log::debug!("ignoring time budget change to {time_budget} while loading");
            return None;
        }
        let outcome = self
            .model
            .refresh(state.position, state.mode, time_budget)
            .await;
        Some(outcome)
    }

    pub async fn handle(&self, event: UiEvent) -> Result<Option<RefreshOutcome>, CoordinateError> {
        match event {
            UiEvent::Mounted => Ok(Some(self.mount().await)),
            UiEvent::Click { lat, lon } => self.on_click(lat, lon).await.map(Some),
            UiEvent::ModeChanged { mode } => Ok(self.on_mode_change(mode).await),
            UiEvent::TimeBudgetChanged { time_budget } => {
                Ok(self.on_time_budget_change(time_budget).await)
            }
        }
    }

    /// mounts, then handles events until the channel closes. refreshes run
    /// concurrently on the calling task, so a new event does not wait for earlier
    /// responses. returns once every refresh has resolved.
    ///
    /// # Returns
    ///
    /// the outcome of every refresh that ran, in the order they resolved
    pub async fn run(&self, mut events: mpsc::Receiver<UiEvent>) -> Vec<RefreshOutcome> {
        let mut pending = FuturesUnordered::new();
        pending.push(self.handle(UiEvent::Mounted));
        let mut outcomes = vec![];
        let mut open = true;
        loop {
            tokio::select! {
                event = events.recv(), if open => match event {
                    Some(e) => pending.push(self.handle(e)),
                    None => open = false,
                },
                Some(handled) = pending.next(), if !pending.is_empty() => match handled {
                    Ok(Some(outcome)) => outcomes.push(outcome),
                    Ok(None) => {}
                    Err(e) => log::warn!("ignoring click: {e}"),
                },
                else => break,
            }
        }
        log::debug!("event channel closed after {} refreshes", outcomes.len());
        outcomes
    }
}
