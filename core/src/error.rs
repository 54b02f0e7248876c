use thiserror::Error;

/// Contract violations raised by the vectorizer and the scorer.
///
/// None of these are transient: they describe a malformed call and are
/// returned to the caller as-is, never retried and never paired with a
/// partial result. An all-zero vector is not an error (it scores 0.0).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Empty or malformed document set, or a sparse vector built with an
    /// index outside its dimension.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Vectors that were not built over the same vocabulary.
    #[error("dimension mismatch at vector {position}: expected {expected}, found {found}")]
    DimensionMismatch {
        expected: usize,
        found: usize,
        position: usize,
    },

    /// Reference index out of range, or a reference id absent from the set.
    #[error("invalid reference: {reason}")]
    InvalidReference { reason: String },
}

impl Error {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        Error::InvalidInput { reason: reason.into() }
    }

    pub(crate) fn invalid_reference(reason: impl Into<String>) -> Self {
        Error::InvalidReference { reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
