//! # Learnkit
//!
//! Boundary-aware document chunking for study sessions.
//!
//! Learnkit splits a document into titled, reading-sized chunks that
//! respect markdown section headings, then lets you inspect, export,
//! highlight, and track progress through those chunks from the command
//! line. The chunking logic itself lives in [`learnkit_core`]; this crate
//! adds configuration, document loading, and output rendering.
//!
//! ## Quick Start
//!
//! ```bash
//! learn chunk notes.md                       # numbered chunk listing
//! learn chunk notes.md --format json         # chunk list as JSON
//! learn export notes.md --format csv -o out/notes.csv
//! learn highlight notes.md --phrase "working memory"
//! learn progress notes.md --completed 0 --completed 1
//! learn stats notes.md
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`document`] | Reading documents from files or stdin |
//! | [`chunk`] | `learn chunk` rendering |
//! | [`export`] | JSON / CSV export |
//! | [`highlight`] | HTML phrase highlighting |
//! | [`progress`] | Reading-session progress reports |
//! | [`stats`] | Document statistics |
//! | [`logging`] | stderr tracing setup |

pub mod chunk;
pub mod config;
pub mod document;
pub mod export;
pub mod highlight;
pub mod logging;
pub mod progress;
pub mod stats;
