//! In-memory reading session over a chunk list.
//!
//! A [`ReadingSession`] tracks which chunk is open and which chunks have been
//! completed. Chunks are referred to by their position; the session never
//! modifies them. Nothing is persisted: a session lives as long as its owner.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::ProgressError;
use crate::models::Chunk;

/// Completion and reading-time totals for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressSummary {
    pub total_chunks: usize,
    pub completed_chunks: usize,
    /// Whole percent completed, truncated. Zero for an empty session.
    pub percent: u32,
    pub total_minutes: u32,
    pub completed_minutes: u32,
    pub remaining_minutes: u32,
}

/// Reading position and completion marks for one chunked document.
#[derive(Debug, Clone)]
pub struct ReadingSession {
    chunks: Vec<Chunk>,
    current: Option<usize>,
    completed: BTreeSet<usize>,
}

impl ReadingSession {
    /// Start a session positioned on the first chunk (if any).
    pub fn new(chunks: Vec<Chunk>) -> Self {
        let current = if chunks.is_empty() { None } else { Some(0) };
        Self {
            chunks,
            current,
            completed: BTreeSet::new(),
        }
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Index of the open chunk.
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// The open chunk.
    pub fn current(&self) -> Option<&Chunk> {
        self.current.and_then(|i| self.chunks.get(i))
    }

    /// Open the chunk at `index`.
    pub fn select(&mut self, index: usize) -> Result<&Chunk, ProgressError> {
        self.check(index)?;
        self.current = Some(index);
        Ok(&self.chunks[index])
    }

    pub fn mark_complete(&mut self, index: usize) -> Result<(), ProgressError> {
        self.check(index)?;
        self.completed.insert(index);
        Ok(())
    }

    pub fn mark_incomplete(&mut self, index: usize) -> Result<(), ProgressError> {
        self.check(index)?;
        self.completed.remove(&index);
        Ok(())
    }

    /// Flip the completion mark; returns the new state.
    pub fn toggle(&mut self, index: usize) -> Result<bool, ProgressError> {
        self.check(index)?;
        if self.completed.remove(&index) {
            Ok(false)
        } else {
            self.completed.insert(index);
            Ok(true)
        }
    }

    pub fn is_complete(&self, index: usize) -> bool {
        self.completed.contains(&index)
    }

    /// Completed chunk indices in ascending order.
    pub fn completed(&self) -> impl Iterator<Item = usize> + '_ {
        self.completed.iter().copied()
    }

    pub fn summary(&self) -> ProgressSummary {
        let total_chunks = self.chunks.len();
        let completed_chunks = self.completed.len();
        let percent = if total_chunks == 0 {
            0
        } else {
            (completed_chunks * 100 / total_chunks) as u32
        };

        let total_minutes: u32 = self.chunks.iter().map(|c| c.estimated_time).sum();
        let completed_minutes: u32 = self
            .completed
            .iter()
            .filter_map(|&i| self.chunks.get(i))
            .map(|c| c.estimated_time)
            .sum();

        ProgressSummary {
            total_chunks,
            completed_chunks,
            percent,
            total_minutes,
            completed_minutes,
            remaining_minutes: total_minutes - completed_minutes,
        }
    }

    fn check(&self, index: usize) -> Result<(), ProgressError> {
        if index < self.chunks.len() {
            Ok(())
        } else {
            Err(ProgressError::OutOfRange {
                index,
                len: self.chunks.len(),
            })
        }
    }
}
