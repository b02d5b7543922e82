//! Document statistics.
//!
//! Summarises a document before reading it: size, estimated tokens, how
//! it splits into chunks, and how long each chunk takes. Used by
//! `learn stats`.

use anyhow::Result;
use learnkit_core::chunk::{chunk_text, split_paragraphs};
use learnkit_core::heading;
use learnkit_core::models::ChunkBounds;
use learnkit_core::reading::{estimate_tokens, word_count};
use std::path::Path;

use crate::document::load_document;
use crate::progress::format_number;

/// Per-chunk breakdown row.
struct ChunkStats {
    title: String,
    chars: usize,
    words: usize,
    minutes: u32,
}

/// Run the stats command: chunk the document and print a summary.
pub fn run_stats(path: &Path, bounds: ChunkBounds) -> Result<()> {
    let text = load_document(path)?;
    print!("{}", render_stats(&path.display().to_string(), &text, bounds));
    Ok(())
}

pub fn render_stats(name: &str, text: &str, bounds: ChunkBounds) -> String {
    let paragraphs = split_paragraphs(text);
    let headings = paragraphs
        .iter()
        .filter(|p| heading::classify(p).is_some())
        .count();
    let chunks = chunk_text(text, bounds);
    let total_minutes: u32 = chunks.iter().map(|c| c.estimated_time).sum();

    let rows: Vec<ChunkStats> = chunks
        .iter()
        .map(|c| ChunkStats {
            title: c.title.clone(),
            chars: c.content.chars().count(),
            words: word_count(&c.content),
            minutes: c.estimated_time,
        })
        .collect();

    let mut out = String::new();
    out.push_str("Learnkit — Document Stats\n");
    out.push_str("=========================\n\n");
    out.push_str(&format!("  Document:      {}\n", name));
    out.push_str(&format!(
        "  Bounds:        {}..{} chars\n\n",
        bounds.min(),
        bounds.max()
    ));
    out.push_str(&format!(
        "  Characters:    {}\n",
        format_number(text.chars().count() as u64)
    ));
    out.push_str(&format!(
        "  Words:         {}\n",
        format_number(word_count(text) as u64)
    ));
    out.push_str(&format!(
        "  Tokens (est):  {}\n",
        format_number(estimate_tokens(text) as u64)
    ));
    out.push_str(&format!("  Paragraphs:    {}\n", paragraphs.len()));
    out.push_str(&format!("  Headings:      {}\n", headings));
    out.push_str(&format!("  Chunks:        {}\n", chunks.len()));
    out.push_str(&format!("  Reading time:  {} min\n", total_minutes));

    if !rows.is_empty() {
        out.push_str("\n  By chunk:\n");
        out.push_str(&format!(
            "  {:<4} {:<40} {:>8} {:>8} {:>5}\n",
            "#", "TITLE", "CHARS", "WORDS", "MIN"
        ));
        out.push_str(&format!("  {}\n", "-".repeat(69)));
        for (i, row) in rows.iter().enumerate() {
            out.push_str(&format!(
                "  {:<4} {:<40} {:>8} {:>8} {:>5}\n",
                i + 1,
                truncate(&row.title, 40),
                format_number(row.chars as u64),
                format_number(row.words as u64),
                row.minutes
            ));
        }
    }
    out
}

/// Shorten `s` to at most `max` characters, marking the cut with `…`.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}
