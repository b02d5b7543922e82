//! Boundary-aware text chunker.
//!
//! Splits a document into titled [`Chunk`]s for sequential reading. Splits
//! only ever happen between paragraphs, and section headings are preferred
//! break points.
//!
//! # Algorithm
//!
//! 1. Split the document into paragraphs on blank lines (`\n\s*\n`).
//! 2. Walk the paragraphs, accumulating them into a buffer with a running
//!    character count and a current title (initially `"Introduction"`).
//! 3. A heading paragraph flushes the buffer when the heading is top-level
//!    (`# `) or the buffer has reached `min_chunk_size`. The heading then
//!    opens the next chunk and names it.
//! 4. A body paragraph flushes the buffer when adding it would pass
//!    `max_chunk_size` *and* the buffer has reached `min_chunk_size`. The
//!    next chunk is named after the paragraph's first sentence.
//! 5. Whatever remains in the buffer becomes the final chunk.
//!
//! # Guarantees
//!
//! - Joining every chunk's `content` with `"\n\n"` gives back the original
//!   paragraph sequence: nothing is dropped, duplicated, or reordered.
//! - Paragraphs are never split, so one paragraph larger than
//!   `max_chunk_size` occupies an oversized chunk of its own.
//! - `min_chunk_size` only *permits* a flush. The first and last chunks may
//!   be smaller.
//! - Empty input yields no chunks.
//!
//! # Example
//!
//! ```rust
//! use learnkit_core::chunk::generate_chunks;
//!
//! let text = "Para one sentence. Still para one.\n\nPara two.";
//! let chunks = generate_chunks(text, 1000, 2000).unwrap();
//! assert_eq!(chunks.len(), 1);
//! assert_eq!(chunks[0].title, "Introduction");
//! assert_eq!(chunks[0].content, text);
//! ```

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::ChunkError;
use crate::heading;
use crate::models::{Chunk, ChunkBounds};
use crate::reading::estimated_minutes;

/// Separator placed between paragraphs inside a chunk.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Title of the chunk that precedes the first title-changing heading.
pub const INTRODUCTION_TITLE: &str = "Introduction";

/// Title used when a size-triggered chunk starts without a full sentence.
pub const CONTINUED_TITLE: &str = "Continued";

/// Marker appended to titles derived from body text.
pub const ELLIPSIS: &str = "...";

static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("paragraph break pattern is valid"));

static FIRST_SENTENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^.!?]+[.!?]").expect("first sentence pattern is valid"));

/// Split a document into paragraphs on blank lines.
///
/// Runs of blank (or whitespace-only) lines count as a single break. A
/// trailing break produces a trailing empty paragraph, so the chunker sees
/// exactly what the document contained. Empty input has no paragraphs.
pub fn split_paragraphs(document: &str) -> Vec<&str> {
    if document.is_empty() {
        return Vec::new();
    }
    PARAGRAPH_BREAK.split(document).collect()
}

/// Chunk `document` using the three-argument form.
///
/// Validates the bounds first; see [`ChunkBounds::new`].
pub fn generate_chunks(
    document: &str,
    min_chunk_size: usize,
    max_chunk_size: usize,
) -> Result<Vec<Chunk>, ChunkError> {
    let bounds = ChunkBounds::new(min_chunk_size, max_chunk_size)?;
    Ok(chunk_text(document, bounds))
}

/// Split `document` into titled chunks that honour heading boundaries.
///
/// Sizes are measured in characters (Unicode scalar values), not bytes.
pub fn chunk_text(document: &str, bounds: ChunkBounds) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut current_chunk: Vec<&str> = Vec::new();
    let mut current_size = 0usize;
    let mut current_title = INTRODUCTION_TITLE.to_string();

    for para in split_paragraphs(document) {
        let para_size = para.chars().count();
        let min_reached = current_size >= bounds.min();

        if let Some(heading) = heading::classify(para) {
            let starts_section = heading.is_top_level();

            if !current_chunk.is_empty() && (starts_section || min_reached) {
                chunks.push(make_chunk(&current_title, &current_chunk));
                current_title = heading.text.to_string();
                current_chunk.clear();
                current_chunk.push(para);
                current_size = para_size;
            } else {
                current_chunk.push(para);
                current_size += para_size;
                if starts_section {
                    current_title = heading.text.to_string();
                }
            }
        } else {
            let overflows = current_size + para_size > bounds.max();

            if overflows && min_reached {
                chunks.push(make_chunk(&current_title, &current_chunk));
                current_title = continuation_title(para);
                current_chunk.clear();
                current_chunk.push(para);
                current_size = para_size;
            } else {
                current_chunk.push(para);
                current_size += para_size;
            }
        }
    }

    if !current_chunk.is_empty() {
        chunks.push(make_chunk(&current_title, &current_chunk));
    }

    debug!(
        chunks = chunks.len(),
        min = bounds.min(),
        max = bounds.max(),
        "chunked document"
    );
    chunks
}

/// Rejoin chunk contents with the paragraph separator.
///
/// For any chunker output this equals the input's paragraphs joined the
/// same way.
pub fn join_paragraphs(chunks: &[Chunk]) -> String {
    chunks
        .iter()
        .map(|c| c.content.as_str())
        .collect::<Vec<_>>()
        .join(PARAGRAPH_SEPARATOR)
}

/// Title for a chunk opened by a body paragraph: its first sentence plus an
/// ellipsis, or `"Continued..."` when there is no sentence terminator.
fn continuation_title(para: &str) -> String {
    match FIRST_SENTENCE.find(para) {
        Some(sentence) => format!("{}{}", sentence.as_str(), ELLIPSIS),
        None => format!("{}{}", CONTINUED_TITLE, ELLIPSIS),
    }
}

fn make_chunk(title: &str, paragraphs: &[&str]) -> Chunk {
    let content = paragraphs.join(PARAGRAPH_SEPARATOR);
    let estimated_time = estimated_minutes(&content);
    Chunk {
        title: title.to_string(),
        content,
        estimated_time,
    }
}
