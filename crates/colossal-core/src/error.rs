/// Alias for `Result<T, DataError>`.
pub type DataResult<T> = Result<T, DataError>;

/// Errors raised when raw numbers do not name an entry in the static tables.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// A location index beyond the end of the location table.
    #[error("location index out of range: {0}")]
    LocationOutOfRange(u16),

    /// An object index that is zero or beyond the end of the object table.
    #[error("object index out of range: {0}")]
    ObjectOutOfRange(u16),

    /// A hint index beyond the end of the hint table.
    #[error("hint index out of range: {0}")]
    HintOutOfRange(usize),
}
