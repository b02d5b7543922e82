//! Export a document's chunks as JSON or CSV.
//!
//! JSON output carries the chunk list plus the total reading time; CSV has
//! one row per chunk with an `index,title,content,estimated_time` header.
//! Text fields are always quoted so multi-paragraph content survives a
//! spreadsheet import.

use anyhow::Result;
use learnkit_core::chunk::chunk_text;
use learnkit_core::models::{Chunk, ChunkBounds};
use serde::Serialize;
use std::path::Path;

use crate::document::load_document;

/// File formats accepted by `learn export`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
}

#[derive(Serialize)]
struct ExportData<'a> {
    total_minutes: u32,
    chunks: Vec<ExportChunk<'a>>,
}

#[derive(Serialize)]
struct ExportChunk<'a> {
    index: usize,
    title: &'a str,
    content: &'a str,
    estimated_time: u32,
}

/// Export chunks of the document at `path`.
///
/// If `output` is `Some`, writes to that file path. Otherwise writes
/// to stdout for piping.
pub fn run_export(
    path: &Path,
    bounds: ChunkBounds,
    format: ExportFormat,
    output: Option<&Path>,
) -> Result<()> {
    let text = load_document(path)?;
    let chunks = chunk_text(&text, bounds);

    let rendered = match format {
        ExportFormat::Json => render_json(&chunks)?,
        ExportFormat::Csv => render_csv(&chunks),
    };

    match output {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(out, &rendered)?;
            eprintln!("Exported {} chunks to {}", chunks.len(), out.display());
        }
        None => {
            print!("{}", rendered);
        }
    }

    Ok(())
}

pub fn render_json(chunks: &[Chunk]) -> Result<String> {
    let data = ExportData {
        total_minutes: chunks.iter().map(|c| c.estimated_time).sum(),
        chunks: chunks
            .iter()
            .enumerate()
            .map(|(index, c)| ExportChunk {
                index,
                title: &c.title,
                content: &c.content,
                estimated_time: c.estimated_time,
            })
            .collect(),
    };
    let mut json = serde_json::to_string_pretty(&data)?;
    json.push('\n');
    Ok(json)
}

pub fn render_csv(chunks: &[Chunk]) -> String {
    let mut out = String::from("index,title,content,estimated_time\n");
    for (index, c) in chunks.iter().enumerate() {
        out.push_str(&format!(
            "{},{},{},{}\n",
            index,
            quote_csv(&c.title),
            quote_csv(&c.content),
            c.estimated_time
        ));
    }
    out
}

/// Quote a field, doubling embedded quotes.
fn quote_csv(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
