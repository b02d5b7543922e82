//! Error types for the core library.

use thiserror::Error;

/// Rejected chunk size bounds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChunkError {
    #[error("chunk size bounds must be positive (min = {min}, max = {max})")]
    ZeroBound { min: usize, max: usize },

    #[error("min_chunk_size ({min}) must not exceed max_chunk_size ({max})")]
    InvertedBounds { min: usize, max: usize },
}

/// Invalid operation on a [`ReadingSession`](crate::progress::ReadingSession).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgressError {
    #[error("chunk index {index} is out of range (session has {len} chunks)")]
    OutOfRange { index: usize, len: usize },
}

/// The phrase set could not be compiled into a matcher.
#[derive(Debug, Error)]
pub enum HighlightError {
    #[error("failed to build highlight pattern: {0}")]
    Pattern(#[from] regex::Error),
}
