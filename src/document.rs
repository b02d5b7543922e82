//! Document loading for CLI commands.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Read a document from `path`, or from stdin when `path` is `-`.
pub fn load_document(path: &Path) -> Result<String> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .with_context(|| "Failed to read document from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read document: {}", path.display()))?
    };

    info!(
        path = %path.display(),
        chars = text.chars().count(),
        "loaded document"
    );
    Ok(text)
}
