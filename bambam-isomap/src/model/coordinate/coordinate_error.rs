#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CoordinateError {
    #[error("coordinate is not a finite number: lat={lat}, lon={lon}")]
    NonFinite { lat: f64, lon: f64 },
    #[error("latitude {0} outside of range [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} outside of range [-180, 180]")]
    LongitudeOutOfRange(f64),
    #[error("ring vertex {index} is malformed: {msg}")]
    MalformedVertex { index: usize, msg: String },
}
