//! Core data models shared by the chunker, the progress tracker, and the
//! CLI renderers.

use serde::{Deserialize, Serialize};

use crate::error::ChunkError;

/// Default lower bound in characters. Reaching it permits an early flush.
pub const DEFAULT_MIN_CHUNK_SIZE: usize = 500;

/// Default upper bound in characters. Soft: a single paragraph may exceed it.
pub const DEFAULT_MAX_CHUNK_SIZE: usize = 1500;

/// A titled, contiguous run of paragraphs from a source document.
///
/// Chunks carry no identifier of their own. Identity is the position in the
/// sequence returned by the chunker, which is also how a
/// [`ReadingSession`](crate::progress::ReadingSession) refers to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Heading text, a first-sentence excerpt, or a placeholder.
    pub title: String,
    /// One or more paragraphs joined by a blank line.
    pub content: String,
    /// Reading time in whole minutes, never less than one.
    pub estimated_time: u32,
}

/// Validated size bounds for the chunker, measured in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkBounds {
    min: usize,
    max: usize,
}

impl ChunkBounds {
    /// Build bounds, rejecting zero values and `min > max`.
    pub fn new(min: usize, max: usize) -> Result<Self, ChunkError> {
        if min == 0 || max == 0 {
            return Err(ChunkError::ZeroBound { min, max });
        }
        if min > max {
            return Err(ChunkError::InvertedBounds { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }
}

impl Default for ChunkBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_CHUNK_SIZE,
            max: DEFAULT_MAX_CHUNK_SIZE,
        }
    }
}
