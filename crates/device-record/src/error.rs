use thiserror::Error;

pub type Result<T, E = RecordError> = core::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("type mismatch for key `{key}`: expected {expected}, found {found}")]
    TypeMismatch {
        key: &'static str,
        expected: &'static str,
        found: &'static str,
    },
    #[error("missing key: `{0}`")]
    MissingKey(&'static str),
    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),
    #[error("expected a JSON array, found {0}")]
    NotAnArray(&'static str),
    #[error("invalid device record at index {index}: {source}")]
    InvalidElement {
        index: usize,
        #[source]
        source: Box<RecordError>,
    },
}
