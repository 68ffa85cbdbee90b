use std::fmt::Display;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// the travel time budgets offered to the user, in minutes.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(try_from = "u32", into = "u32")]
pub enum TimeBudget {
    Five,
    #[default]
    Fifteen,
    Thirty,
    Sixty,
}

impl TimeBudget {
    pub const ALL: [TimeBudget; 4] = [
        TimeBudget::Five,
        TimeBudget::Fifteen,
        TimeBudget::Thirty,
        TimeBudget::Sixty,
    ];

    pub fn minutes(&self) -> u32 {
        match self {
            TimeBudget::Five => 5,
            TimeBudget::Fifteen => 15,
            TimeBudget::Thirty => 30,
            TimeBudget::Sixty => 60,
        }
    }

    /// the budget as sent to the isochrone service
    pub fn seconds(&self) -> u32 {
        self.minutes() * 60
    }
}

impl TryFrom<u32> for TimeBudget {
    type Error = String;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        TimeBudget::ALL
            .into_iter()
            .find(|b| b.minutes() == minutes)
            .ok_or_else(|| {
                let offered = TimeBudget::ALL
                    .iter()
                    .map(|b| b.minutes())
                    .join(", ");
                format!("time budget of {minutes} minutes is not offered, expected one of {offered}")
            })
    }
}

impl From<TimeBudget> for u32 {
    fn from(value: TimeBudget) -> Self {
        value.minutes()
    }
}

impl Display for TimeBudget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} min", self.minutes())
    }
}
