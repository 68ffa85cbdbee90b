use crate::model::coordinate::CoordinateError;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum IsochroneError {
    #[error("failure reaching isochrone service: {0}")]
    NetworkFailure(String),
    /// the request could not be prepared, so nothing was sent
    #[error("invalid isochrone request: {0}")]
    InvalidRequest(String),
    #[error("isochrone service rejected request: {0}")]
    ServiceRejected(String),
    #[error("malformed isochrone response: {0}")]
    MalformedResponse(String),
    #[error("invalid coordinate in isochrone response: {source}")]
    InvalidCoordinate {
        #[from]
        source: CoordinateError,
    },
}
