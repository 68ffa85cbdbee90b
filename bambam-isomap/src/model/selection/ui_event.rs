use std::str::FromStr;

use crate::model::isochrone::{TimeBudget, TravelMode};

/// interactions that lead to a refresh.
#[derive(Clone, Debug, PartialEq)]
pub enum UiEvent {
    /// the map was first shown
    Mounted,
    /// a click on the map at a geographic coordinate. not yet validated.
    Click { lat: f64, lon: f64 },
    ModeChanged { mode: TravelMode },
    TimeBudgetChanged { time_budget: TimeBudget },
}

/// reads the line commands of the interactive CLI:
///
/// ```text
/// click 41.1479 -8.6046
/// mode cycling
/// time 30
/// ```
impl FromStr for UiEvent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = s.split_whitespace().collect::<Vec<_>>();
        match tokens.as_slice() {
            ["mount"] => Ok(UiEvent::Mounted),
            ["click", lat, lon] => {
                let lat = lat
                    .parse::<f64>()
                    .map_err(|e| format!("invalid latitude '{lat}': {e}"))?;
                let lon = lon
                    .parse::<f64>()
                    .map_err(|e| format!("invalid longitude '{lon}': {e}"))?;
                Ok(UiEvent::Click { lat, lon })
            }
            ["mode", mode] => Ok(UiEvent::ModeChanged {
                mode: mode.parse()?,
            }),
            ["time", minutes] => {
                let minutes = minutes
                    .parse::<u32>()
                    .map_err(|e| format!("invalid minutes '{minutes}': {e}"))?;
                Ok(UiEvent::TimeBudgetChanged {
                    time_budget: TimeBudget::try_from(minutes)?,
                })
            }
            _ => Err(format!(
                "unrecognized command '{}', expected 'click <lat> <lon>', 'mode <mode>' or 'time <minutes>'",
                s.trim()
            )),
        }
    }
}
