use thiserror::Error;

// =============================================================================
// Errors raised by the positional and windowing operations
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeqError {
    #[error("Count {n} is out of bounds for a sequence of length {len} (expected 0..={len})")]
    OutOfBounds { n: isize, len: usize },

    #[error("Invalid chunk size {n}: size must be a positive integer")]
    InvalidSize { n: isize },
}

impl SeqError {
    pub fn out_of_bounds(n: isize, len: usize) -> Self {
        Self::OutOfBounds { n, len }
    }

    pub fn invalid_size(n: isize) -> Self {
        Self::InvalidSize { n }
    }
}

pub type Result<T> = std::result::Result<T, SeqError>;

/// Converts a requested element count into an index in `0..=len`.
pub(crate) fn checked_count(n: isize, len: usize) -> Result<usize> {
    match usize::try_from(n) {
        Ok(count) if count <= len => Ok(count),
        _ => Err(SeqError::out_of_bounds(n, len)),
    }
}

/// Converts a requested chunk or window size into a positive `usize`.
pub(crate) fn checked_size(n: isize) -> Result<usize> {
    match usize::try_from(n) {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(SeqError::invalid_size(n)),
    }
}

// =============================================================================
// Tests
// =============================================================================
