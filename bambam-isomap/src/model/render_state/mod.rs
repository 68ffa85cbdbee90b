mod publish_policy;
mod refresh_outcome;
mod render_state;
mod render_state_model;

pub use publish_policy::PublishPolicy;
pub use refresh_outcome::{RefreshError, RefreshOutcome};
pub use render_state::{IsochroneOverlay, RenderState};
pub use render_state_model::{RefreshSettings, RenderStateModel, DEFAULT_SAMPLE_COUNT};
