//! `learn highlight`: mark phrases in a document with HTML spans.

use anyhow::{Context, Result};
use learnkit_core::highlight::highlight_text;
use std::path::Path;

use crate::document::load_document;

pub fn run_highlight(path: &Path, phrases: &[String]) -> Result<()> {
    let text = load_document(path)?;
    let highlighted =
        highlight_text(&text, phrases).with_context(|| "Failed to highlight document")?;
    print!("{}", highlighted);
    if !highlighted.ends_with('\n') {
        println!();
    }
    Ok(())
}
