//! Reading progress reporting for `learn progress`.
//!
//! Builds a [`ReadingSession`] over the document's chunks, applies the
//! completion marks given on the command line, and reports the result in
//! human or JSON form on stdout.

use anyhow::{Context, Result};
use learnkit_core::chunk::chunk_text;
use learnkit_core::models::ChunkBounds;
use learnkit_core::progress::ReadingSession;
use std::path::Path;

use crate::config::OutputFormat;
use crate::document::load_document;

/// Renders a session's progress. Implementations return the full report.
pub trait ProgressReporter {
    fn render(&self, session: &ReadingSession) -> Result<String>;
}

/// Human-friendly report: totals, then one line per chunk with a check box.
pub struct HumanProgress;

impl ProgressReporter for HumanProgress {
    fn render(&self, session: &ReadingSession) -> Result<String> {
        let summary = session.summary();
        let mut out = format!(
            "Progress: {} / {} chunks ({}% completed)\n",
            format_number(summary.completed_chunks as u64),
            format_number(summary.total_chunks as u64),
            summary.percent
        );
        out.push_str(&format!(
            "Reading time: {} min total, {} min completed, {} min remaining\n",
            summary.total_minutes, summary.completed_minutes, summary.remaining_minutes
        ));
        if !session.is_empty() {
            out.push('\n');
        }
        for (i, chunk) in session.chunks().iter().enumerate() {
            let mark = if session.is_complete(i) { "x" } else { " " };
            out.push_str(&format!(
                "  [{}] {}. {} ({} min)\n",
                mark,
                i + 1,
                chunk.title,
                chunk.estimated_time
            ));
        }
        Ok(out)
    }
}

/// Machine-readable report: one JSON object.
pub struct JsonProgress;

impl ProgressReporter for JsonProgress {
    fn render(&self, session: &ReadingSession) -> Result<String> {
        let chunks: Vec<serde_json::Value> = session
            .chunks()
            .iter()
            .enumerate()
            .map(|(i, chunk)| {
                serde_json::json!({
                    "index": i,
                    "title": chunk.title,
                    "estimated_time": chunk.estimated_time,
                    "completed": session.is_complete(i),
                })
            })
            .collect();
        let obj = serde_json::json!({
            "summary": session.summary(),
            "chunks": chunks,
        });
        let mut line = serde_json::to_string_pretty(&obj)?;
        line.push('\n');
        Ok(line)
    }
}

impl OutputFormat {
    /// Build a reporter for this format.
    pub fn reporter(&self) -> Box<dyn ProgressReporter> {
        match self {
            OutputFormat::Text => Box::new(HumanProgress),
            OutputFormat::Json => Box::new(JsonProgress),
        }
    }
}

/// Chunk the document, mark `completed` indices (zero-based) and print the
/// report.
pub fn run_progress(
    path: &Path,
    bounds: ChunkBounds,
    completed: &[usize],
    format: OutputFormat,
) -> Result<()> {
    let text = load_document(path)?;
    let session = build_session(&text, bounds, completed)?;
    print!("{}", format.reporter().render(&session)?);
    Ok(())
}

pub fn build_session(text: &str, bounds: ChunkBounds, completed: &[usize]) -> Result<ReadingSession> {
    let mut session = ReadingSession::new(chunk_text(text, bounds));
    for &index in completed {
        session
            .mark_complete(index)
            .with_context(|| format!("Cannot mark chunk {} complete", index))?;
    }
    Ok(session)
}

pub(crate) fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + (s.len() - 1) / 3);
    let chars: Vec<char> = s.chars().rev().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }
    result.chars().rev().collect()
}
