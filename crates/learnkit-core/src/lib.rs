//! # Learnkit Core
//!
//! Pure logic for Learnkit: the chunk model, heading classification, the
//! boundary-aware chunker, reading-time estimates, phrase highlighting, and
//! in-memory session progress.
//!
//! This crate performs no filesystem, network, or terminal I/O. Every
//! function is deterministic for a given input, so the CLI (and any other
//! front end) can call it freely.
//!
//! ```rust
//! use learnkit_core::chunk::generate_chunks;
//!
//! let chunks = generate_chunks("# Title\n\nShort body.", 500, 1500).unwrap();
//! assert_eq!(chunks.len(), 1);
//! assert_eq!(chunks[0].title, "Title");
//! ```

pub mod chunk;
pub mod error;
pub mod heading;
pub mod highlight;
pub mod models;
pub mod progress;
pub mod reading;

pub use chunk::{chunk_text, generate_chunks};
pub use error::{ChunkError, HighlightError, ProgressError};
pub use models::{Chunk, ChunkBounds};
