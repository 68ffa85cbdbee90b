pub mod interactive;
mod isomap_app_error;
mod isomap_cli;
pub mod query;

pub use isomap_app_error::IsomapAppError;
pub use isomap_cli::{IsomapCliArguments, IsomapOperation};

/// single-threaded runtime for driving the async refresh pipeline from the CLI
fn runtime() -> Result<tokio::runtime::Runtime, IsomapAppError> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| {
            IsomapAppError::TokioError(format!("failure creating async rust tokio runtime: {e}"))
        })
}
