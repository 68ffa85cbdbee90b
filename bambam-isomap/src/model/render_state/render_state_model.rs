use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;

use crate::model::{
    coordinate::Position,
    isochrone::{IsochronePolygon, IsochroneSource, TimeBudget, TravelMode},
    sampling::{RandomPointSampler, SampleCatalog},
};

use super::{IsochroneOverlay, PublishPolicy, RefreshError, RefreshOutcome, RenderState};

pub const DEFAULT_SAMPLE_COUNT: usize = 15;

/// parameters of the refresh transition that do not change between refreshes.
#[derive(Clone, Debug, PartialEq)]
pub struct RefreshSettings {
    pub sample_count: usize,
    pub sampler: RandomPointSampler,
    pub catalog: SampleCatalog,
    pub publish_policy: PublishPolicy,
}

impl Default for RefreshSettings {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            sampler: RandomPointSampler::default(),
            catalog: SampleCatalog::default(),
            publish_policy: PublishPolicy::default(),
        }
    }
}

/// owner of the render state. [`RenderStateModel::refresh`] is the only mutator;
/// observers read snapshots through [`RenderStateModel::subscribe`], and every
/// change is applied as one update so an overlay is never seen half-written.
///
/// refreshes may overlap: each one takes the next sequence number when issued and
/// the [`PublishPolicy`] decides whether its result is published when it resolves.
pub struct RenderStateModel<S> {
    source: S,
    settings: RefreshSettings,
    issued: AtomicU64,
    state: watch::Sender<RenderState>,
}

impl<S: IsochroneSource> RenderStateModel<S> {
    pub fn new(source: S, initial: RenderState, settings: RefreshSettings) -> RenderStateModel<S> {
        let (state, _) = watch::channel(initial);
        RenderStateModel {
            source,
            settings,
            issued: AtomicU64::new(0),
            state,
        }
    }

    /// a copy of the current state
    pub fn state(&self) -> RenderState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<RenderState> {
        self.state.subscribe()
    }

    pub fn busy(&self) -> bool {
        self.state.borrow().busy()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// sequence number of the most recently issued refresh, 0 before the first
    pub fn latest_issued(&self) -> u64 {
        self.issued.load(Ordering::SeqCst)
    }

    /// selects `position`, `mode` and `time_budget`, fetches the isochrone for them
    /// and publishes the polygon with freshly sampled points. failures are logged
    /// and leave the previous overlay in place. the busy flag is released on every
    /// path.
    pub async fn refresh(
        &self,
        position: Position,
        mode: TravelMode,
        time_budget: TimeBudget,
    ) -> RefreshOutcome {
        let sequence = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_modify(|state| {
            state.position = position;
            state.mode = mode;
            state.time_budget = time_budget;
            state.in_flight += 1;
        });
        log::debug!("refresh {sequence}: {mode} for {time_budget} from {position}");

        let result = match self
            .source
            .fetch_isochrone(position, mode, time_budget)
            .await
        {
            Ok(polygon) => self.build_overlay(sequence, polygon),
            Err(e) => Err(RefreshError::from(e)),
        };

        match result {
            Ok(overlay) => {
                let latest = self.latest_issued();
                if self
                    .settings
                    .publish_policy
                    .should_publish(sequence, latest)
                {
                    log::info!(
                        "refresh {sequence}: publishing polygon with {} vertices and {} listings",
                        overlay.polygon.len(),
                        overlay.listings.len()
                    );
                    self.state.send_modify(|state| {
                        state.in_flight = state.in_flight.saturating_sub(1);
                        state.overlay = Some(overlay);
                    });
                    RefreshOutcome::Published { sequence }
                } else {
                    log::debug!("refresh {sequence}: discarding stale response, latest is {latest}");
                    self.release();
                    RefreshOutcome::Discarded { sequence }
                }
            }
            Err(error) => {
                log::error!("refresh {sequence} failed: {error}");
                self.release();
                RefreshOutcome::Failed { sequence, error }
            }
        }
    }

    fn build_overlay(
        &self,
        sequence: u64,
        polygon: IsochronePolygon,
    ) -> Result<IsochroneOverlay, RefreshError> {
        let mut rng = rand::rng();
        let points =
            self.settings
                .sampler
                .sample_interior(&polygon, self.settings.sample_count, &mut rng)?;
        let listings = self.settings.catalog.pair(points);
        Ok(IsochroneOverlay {
            sequence,
            polygon,
            listings,
        })
    }

    fn release(&self) {
        self.state.send_modify(|state| {
            state.in_flight = state.in_flight.saturating_sub(1);
        });
    }
}
