use std::time::Duration;

use config::{builder::DefaultState, Config, ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::model::{
    coordinate::Position,
    isochrone::{IsochroneClient, IsochroneError, TimeBudget, TravelMode},
    render_state::{PublishPolicy, RefreshSettings, RenderState, DEFAULT_SAMPLE_COUNT},
    sampling::{RandomPointSampler, SampleCatalog, DEFAULT_MAX_ATTEMPTS},
};

use super::IsomapConfigError;

/// prefix of environment variables that override file values,
/// e.g. `ISOMAP_BACKEND_ENDPOINT`
pub const ENV_PREFIX: &str = "ISOMAP";

/// run configuration, read once at startup. only `backend_endpoint` is required.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct IsomapConfig {
    /// base URL of the isochrone service, without the `/v2/isochrones` path
    pub backend_endpoint: String,
    #[serde(default = "default_center")]
    pub default_center: Position,
    #[serde(default)]
    pub default_mode: TravelMode,
    #[serde(default)]
    pub default_time_budget: TimeBudget,
    #[serde(default = "default_sample_count")]
    pub sample_count: usize,
    #[serde(default = "default_max_sample_attempts")]
    pub max_sample_attempts: usize,
    #[serde(default)]
    pub publish_policy: PublishPolicy,
    #[serde(default = "default_request_id")]
    pub request_id: String,
    /// when absent, requests never time out
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    #[serde(default)]
    pub catalog: SampleCatalog,
}

fn default_center() -> Position {
    Position::new_unchecked(41.14793150306301, -8.60465496868542)
}

fn default_sample_count() -> usize {
    DEFAULT_SAMPLE_COUNT
}

fn default_max_sample_attempts() -> usize {
    DEFAULT_MAX_ATTEMPTS
}

fn default_request_id() -> String {
    String::from("my_request")
}

impl IsomapConfig {
    /// reads the optional TOML file, then applies `ISOMAP_*` environment overrides.
    pub fn load(config_file: Option<&str>) -> Result<IsomapConfig, IsomapConfigError> {
        let mut builder = Config::builder();
        if let Some(f) = config_file {
            log::info!("reading isomap configuration from {f}");
            builder = builder.add_source(File::new(f, FileFormat::Toml));
        }
        let builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true));
        Self::build(builder)
    }

    pub fn from_toml_str(toml: &str) -> Result<IsomapConfig, IsomapConfigError> {
        let builder = Config::builder().add_source(File::from_str(toml, FileFormat::Toml));
        Self::build(builder)
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<IsomapConfig, IsomapConfigError> {
        let config = builder
            .build()
            .map_err(|e| IsomapConfigError::ConfigReadError {
                msg: String::from("failed reading isomap configuration"),
                source: e,
            })?;
        let conf = config
            .try_deserialize::<IsomapConfig>()
            .map_err(|e| IsomapConfigError::ConfigReadError {
                msg: String::from("failed decoding isomap configuration"),
                source: e,
            })?;
        conf.validate()?;
        Ok(conf)
    }

    pub fn validate(&self) -> Result<(), IsomapConfigError> {
        let endpoint = self.backend_endpoint.trim();
        if endpoint.is_empty() {
            return Err(IsomapConfigError::InvalidConfiguration(String::from(
                "backend_endpoint must not be empty",
            )));
        }
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(IsomapConfigError::InvalidConfiguration(format!(
                "backend_endpoint must be an http(s) URL, found '{endpoint}'"
            )));
        }
        if self.max_sample_attempts < self.sample_count {
            return Err(IsomapConfigError::InvalidConfiguration(format!(
                "max_sample_attempts ({}) must be at least sample_count ({})",
                self.max_sample_attempts, self.sample_count
            )));
        }
        Ok(())
    }

    pub fn initial_state(&self) -> RenderState {
        RenderState::new(
            self.default_center,
            self.default_mode,
            self.default_time_budget,
        )
    }

    pub fn refresh_settings(&self) -> RefreshSettings {
        RefreshSettings {
            sample_count: self.sample_count,
            sampler: RandomPointSampler::new(self.max_sample_attempts),
            catalog: self.catalog.clone(),
            publish_policy: self.publish_policy,
        }
    }

    pub fn build_client(&self) -> Result<IsochroneClient, IsochroneError> {
        let timeout = self.request_timeout_secs.map(Duration::from_secs);
        IsochroneClient::new(&self.backend_endpoint, &self.request_id, timeout)
    }
}
