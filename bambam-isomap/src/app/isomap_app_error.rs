use crate::{
    config::IsomapConfigError,
    model::{
        coordinate::CoordinateError, isochrone::IsochroneError, output::OutputError,
        render_state::RefreshError,
    },
};

#[derive(thiserror::Error, Debug)]
pub enum IsomapAppError {
    #[error(transparent)]
    Configuration(#[from] IsomapConfigError),
    #[error("failure building isochrone client: {0}")]
    ClientError(#[from] IsochroneError),
    #[error("invalid origin: {0}")]
    InvalidOrigin(#[from] CoordinateError),
    #[error("isochrone refresh failed: {0}")]
    RefreshFailed(RefreshError),
    #[error("isochrone refresh {0} was superseded before it resolved")]
    RefreshDiscarded(u64),
    #[error(transparent)]
    OutputError(#[from] OutputError),
    #[error("error creating a runtime to handle async code: {0}")]
    TokioError(String),
    #[error("failure reading commands: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
}
