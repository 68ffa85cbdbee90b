use crate::model::{isochrone::IsochroneError, sampling::SampleError};

#[derive(thiserror::Error, Debug)]
pub enum RefreshError {
    #[error(transparent)]
    Fetch(#[from] IsochroneError),
    #[error("failure sampling isochrone interior: {0}")]
    Sample(#[from] SampleError),
}

/// how a single refresh ended. failures are already logged by the time this is returned.
#[derive(Debug)]
pub enum RefreshOutcome {
    Published { sequence: u64 },
    /// the response arrived but a newer refresh had been issued in the meantime
    Discarded { sequence: u64 },
    Failed { sequence: u64, error: RefreshError },
}

impl RefreshOutcome {
    pub fn sequence(&self) -> u64 {
        match self {
            RefreshOutcome::Published { sequence } => *sequence,
            RefreshOutcome::Discarded { sequence } => *sequence,
            RefreshOutcome::Failed { sequence, .. } => *sequence,
        }
    }

    pub fn is_published(&self) -> bool {
        matches!(self, RefreshOutcome::Published { .. })
    }
}
