#[derive(thiserror::Error, Debug)]
pub enum OutputError {
    #[error("failure serializing overlay: {0}")]
    SerializeFailed(String),
}
