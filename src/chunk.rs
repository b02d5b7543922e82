//! `learn chunk`: print a document's chunks.

use anyhow::Result;
use learnkit_core::chunk::chunk_text;
use learnkit_core::models::{Chunk, ChunkBounds};
use std::path::Path;

use crate::config::OutputFormat;
use crate::document::load_document;

/// Chunk the document at `path` and print the result to stdout.
pub fn run_chunk(path: &Path, bounds: ChunkBounds, format: OutputFormat) -> Result<()> {
    let text = load_document(path)?;
    let chunks = chunk_text(&text, bounds);

    if chunks.is_empty() {
        eprintln!("No chunks (document is empty).");
        return Ok(());
    }

    match format {
        OutputFormat::Text => print!("{}", render_text(&chunks)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&chunks)?),
    }
    Ok(())
}

/// Human-readable listing: a numbered header per chunk followed by its
/// content.
pub fn render_text(chunks: &[Chunk]) -> String {
    let mut out = String::new();
    for (i, chunk) in chunks.iter().enumerate() {
        let header = format!(
            "Chunk {}: {} ({} min)",
            i + 1,
            chunk.title,
            chunk.estimated_time
        );
        out.push_str(&header);
        out.push('\n');
        out.push_str(&"-".repeat(header.chars().count()));
        out.push('\n');
        out.push_str(&chunk.content);
        out.push_str("\n\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text_numbers_from_one() {
        let chunks = vec![
            Chunk {
                title: "Introduction".to_string(),
                content: "Hello.".to_string(),
                estimated_time: 1,
            },
            Chunk {
                title: "Next".to_string(),
                content: "# Next\n\nMore.".to_string(),
                estimated_time: 2,
            },
        ];
        let out = render_text(&chunks);
        assert!(out.starts_with("Chunk 1: Introduction (1 min)\n----"));
        assert!(out.contains("Chunk 2: Next (2 min)\n"));
        assert!(out.contains("# Next\n\nMore.\n\n"));
    }
}
