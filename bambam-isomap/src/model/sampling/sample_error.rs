#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SampleError {
    #[error("cannot sample from degenerate polygon: {0}")]
    DegeneratePolygon(String),
    #[error("accepted {accepted} of {requested} points after {attempts} draws")]
    AttemptsExhausted {
        accepted: usize,
        requested: usize,
        attempts: usize,
    },
}
