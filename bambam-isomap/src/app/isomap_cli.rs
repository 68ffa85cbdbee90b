use clap::{Parser, Subcommand};

use crate::{
    config::IsomapConfig,
    model::{
        isochrone::{TimeBudget, TravelMode},
        output::OverlayFormat,
    },
};

use super::IsomapAppError;

/// command line tool for exploring isochrones served by an openrouteservice-style backend
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct IsomapCliArguments {
    /// TOML configuration file. any value can be overridden with an ISOMAP_*
    /// environment variable, such as ISOMAP_BACKEND_ENDPOINT.
    #[arg(short, long, global = true)]
    pub config_file: Option<String>,
    /// select the isomap operation to run
    #[command(subcommand)]
    pub op: IsomapOperation,
}

#[derive(Debug, Clone, Subcommand)]
pub enum IsomapOperation {
    /// computes a single isochrone with sampled listings and writes it to stdout
    Query {
        /// origin latitude
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// origin longitude
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        /// travel mode, defaults to the configured mode
        #[arg(short, long, value_enum)]
        mode: Option<TravelMode>,
        /// time budget in minutes (5, 15, 30 or 60), defaults to the configured budget
        #[arg(short = 't', long, value_parser = parse_time_budget)]
        minutes: Option<TimeBudget>,
        /// output encoding
        #[arg(short, long, value_enum, default_value_t = OverlayFormat::GeoJson)]
        format: OverlayFormat,
    },
    /// reads map clicks and control changes from stdin, one per line:
    /// `mount`, `click <lat> <lon>`, `mode <driving|cycling|walking>`, `time <minutes>`, `quit`
    Interactive {
        /// print each published overlay in this encoding instead of a summary line
        #[arg(short, long, value_enum)]
        format: Option<OverlayFormat>,
    },
}

impl IsomapOperation {
    pub fn run(&self, config_file: Option<&str>) -> Result<(), IsomapAppError> {
        let conf = IsomapConfig::load(config_file)?;
        log::debug!("isomap backend endpoint: {}", conf.backend_endpoint);
        match self {
            IsomapOperation::Query {
                lat,
                lon,
                mode,
                minutes,
                format,
            } => crate::app::query::run_query(&conf, *lat, *lon, *mode, *minutes, format),
            IsomapOperation::Interactive { format } => {
                crate::app::interactive::run_interactive(&conf, format.as_ref())
            }
        }
    }
}

fn parse_time_budget(s: &str) -> Result<TimeBudget, String> {
    let minutes = s
        .parse::<u32>()
        .map_err(|e| format!("invalid minutes '{s}': {e}"))?;
    TimeBudget::try_from(minutes)
}
