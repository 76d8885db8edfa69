use thiserror;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TonalError {
    #[error(
        "Arity mismatch: can not add a {found}-element value \
        to a {expected}-element value"
    )]
    Arity { expected: usize, found: usize },
    #[error("Tonal values have 2 or 3 elements, found: {0}")]
    InvalidLength(usize),
    #[error("Unsupported quality: {0}")]
    UnsupportedQuality(String),
    #[error("Ambiguous quality `{0}`: needs a diatonic degree to resolve")]
    AmbiguousQuality(String),
    #[error("Index {index} is out of range of the {table} table")]
    Lookup { table: &'static str, index: i32 },
    #[error("Can not parse `{0}`")]
    Parse(String),
}
pub type TonalResult<T> = Result<T, TonalError>;
