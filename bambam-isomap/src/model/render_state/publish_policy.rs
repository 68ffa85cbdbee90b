use serde::{Deserialize, Serialize};

/// decides which of several overlapping refreshes gets to publish its overlay.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PublishPolicy {
    /// only the most recently issued refresh publishes. responses to older
    /// refreshes are discarded, whatever order they arrive in.
    #[default]
    LatestIssued,
    /// every successful refresh publishes, so the response that resolves last wins.
    LastResolved,
}

impl PublishPolicy {
    pub fn should_publish(&self, sequence: u64, latest_issued: u64) -> bool {
        match self {
            PublishPolicy::LatestIssued => sequence == latest_issued,
            PublishPolicy::LastResolved => true,
        }
    }
}
