// src/error.rs
//! Error types for buffer operations with conversion support

use std::fmt;

/// Errors that can occur during buffer operations.
///
/// Every variant is a contract violation detected synchronously at the call
/// that introduced it. Nothing is retried or recovered internally; a failing
/// operation reports its error before mutating the buffer, so the buffer is
/// always left unchanged on `Err`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Index or range argument outside the valid logical range
    IndexOutOfRange {
        /// The offending index (or range start)
        index: usize,
        /// The logical length the index was checked against
        len: usize,
    },
    /// Argument rejected before any work was done (zero repeat count,
    /// empty pattern, ...)
    InvalidArgument(String),
    /// Requested total capacity is not representable
    CapacityOverflow,
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "Index {} out of range for length {}", index, len)
            }
            Self::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Self::CapacityOverflow => write!(f, "Requested capacity exceeds maximum"),
        }
    }
}

impl std::error::Error for BufferError {}

/// Convert BufferError to anyhow::Error
#[cfg(feature = "anyhow")]
impl From<BufferError> for anyhow::Error {
    fn from(err: BufferError) -> Self {
        anyhow::anyhow!("{}", err)
    }
}

/// Result type alias for buffer operations
pub type Result<T> = std::result::Result<T, BufferError>;

/// Extension trait for converting Results between different error types
pub trait ResultExt<T> {
    /// Convert to anyhow::Result
    #[cfg(feature = "anyhow")]
    fn into_anyhow(self) -> anyhow::Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    #[cfg(feature = "anyhow")]
    fn into_anyhow(self) -> anyhow::Result<T> {
        self.map_err(|e| e.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_index_out_of_range() {
        let err = BufferError::IndexOutOfRange { index: 9, len: 4 };
        assert_eq!(err.to_string(), "Index 9 out of range for length 4");
    }

    #[test]
    fn test_display_invalid_argument() {
        let err = BufferError::InvalidArgument("repeat count must be positive".into());
        assert!(err.to_string().contains("repeat count"));
    }

    #[cfg(feature = "anyhow")]
    #[test]
    fn test_anyhow_conversion() {
        let err = BufferError::CapacityOverflow;
        let anyhow_err: anyhow::Error = err.into();
        assert!(anyhow_err.to_string().contains("capacity"));
    }
}
