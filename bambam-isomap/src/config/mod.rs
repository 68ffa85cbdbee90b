mod isomap_config;
mod isomap_config_error;

pub use isomap_config::{IsomapConfig, ENV_PREFIX};
pub use isomap_config_error::IsomapConfigError;
