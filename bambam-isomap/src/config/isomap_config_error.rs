#[derive(thiserror::Error, Debug)]
pub enum IsomapConfigError {
    #[error("{msg}: {source}")]
    ConfigReadError {
        msg: String,
        source: config::ConfigError,
    },
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
