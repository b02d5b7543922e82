//! # Learnkit CLI (`learn`)
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `learn chunk <file>` | Split a document into titled chunks and print them |
//! | `learn export <file>` | Write chunks as JSON or CSV |
//! | `learn highlight <file> --phrase <p>` | Wrap phrases in HTML highlight spans |
//! | `learn progress <file>` | Report reading progress for completed chunks |
//! | `learn stats <file>` | Summarise size, chunks, and reading time |
//!
//! `<file>` may be `-` to read from stdin.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use learnkit::config::{self, Config, OutputFormat};
use learnkit::export::ExportFormat;
use learnkit::{chunk, export, highlight, logging, progress, stats};

/// Learnkit — split documents into reading-sized chunks that respect
/// section headings.
#[derive(Parser)]
#[command(
    name = "learn",
    about = "Learnkit — boundary-aware document chunking for study sessions",
    version,
    long_about = "Learnkit splits a document into titled chunks on paragraph boundaries, \
    preferring markdown headings as break points, and estimates reading time per chunk. \
    Chunks can be listed, exported as JSON or CSV, highlighted, and tracked for progress."
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./config/learn.toml` when that file exists; otherwise
    /// built-in defaults are used.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Document input and chunk size overrides shared by every command.
#[derive(Args)]
struct DocumentArgs {
    /// Document to read, or `-` for stdin.
    file: PathBuf,

    /// Minimum chunk size in characters (overrides `chunking.min_chunk_size`).
    #[arg(long)]
    min: Option<usize>,

    /// Maximum chunk size in characters (overrides `chunking.max_chunk_size`).
    #[arg(long)]
    max: Option<usize>,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Split a document into chunks and print them.
    ///
    /// Paragraphs are never split. A top-level `# ` heading always starts a
    /// new chunk; other headings start one once the current chunk has
    /// reached the minimum size.
    Chunk {
        #[command(flatten)]
        doc: DocumentArgs,

        /// Output format (defaults to `output.format` from config).
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Export chunks as JSON or CSV.
    Export {
        #[command(flatten)]
        doc: DocumentArgs,

        /// Export format.
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Write to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the document with phrases wrapped in highlight spans.
    ///
    /// Matching is case-insensitive. Phrases shorter than three characters
    /// are ignored.
    Highlight {
        /// Document to read, or `-` for stdin.
        file: PathBuf,

        /// Phrase to highlight. Repeat for several phrases.
        #[arg(long = "phrase", required = true)]
        phrases: Vec<String>,
    },

    /// Report reading progress.
    ///
    /// Chunks the document, marks the given zero-based chunk indices as
    /// completed, and prints completion and reading-time totals.
    Progress {
        #[command(flatten)]
        doc: DocumentArgs,

        /// Zero-based index of a completed chunk. Repeat for several.
        #[arg(long = "completed")]
        completed: Vec<usize>,

        /// Output format (defaults to `output.format` from config).
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Summarise document size, chunking, and reading time.
    Stats {
        #[command(flatten)]
        doc: DocumentArgs,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_console_logging(cli.verbose);

    let cfg: Config = config::resolve_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Chunk { doc, format } => {
            let bounds = cfg.chunking.bounds(doc.min, doc.max)?;
            let format = format.unwrap_or(cfg.output.format);
            chunk::run_chunk(&doc.file, bounds, format)?;
        }
        Commands::Export {
            doc,
            format,
            output,
        } => {
            let bounds = cfg.chunking.bounds(doc.min, doc.max)?;
            export::run_export(&doc.file, bounds, format, output.as_deref())?;
        }
        Commands::Highlight { file, phrases } => {
            highlight::run_highlight(&file, &phrases)?;
        }
        Commands::Progress {
            doc,
            completed,
            format,
        } => {
            let bounds = cfg.chunking.bounds(doc.min, doc.max)?;
            let format = format.unwrap_or(cfg.output.format);
            progress::run_progress(&doc.file, bounds, &completed, format)?;
        }
        Commands::Stats { doc } => {
            let bounds = cfg.chunking.bounds(doc.min, doc.max)?;
            stats::run_stats(&doc.file, bounds)?;
        }
    }

    Ok(())
}
