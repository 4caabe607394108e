//! Renderer module
//!
//! Renders ranked entries to stdout-style writers: a fixed-width table (the
//! default), JSON Lines, or a single JSON array.

use crate::core::model::RankedEntry;
use std::io::{self, Write};

/// Header line of the table format
pub const TABLE_HEADER: &str = "Count     Word";

/// Width of the left-aligned count column
pub const COUNT_WIDTH: usize = 10;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Jsonl,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" | "text" => Ok(OutputFormat::Table),
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Format one table row: count padded to [`COUNT_WIDTH`], then the word
pub fn table_row(entry: &RankedEntry) -> String {
    format!("{:<width$}{}", entry.count, entry.word, width = COUNT_WIDTH)
}

/// Write `entries` to `writer` in the given format
pub fn render_entries<W: Write>(
    mut writer: W,
    entries: &[RankedEntry],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Table => {
            writeln!(writer, "{}", TABLE_HEADER)?;
            for entry in entries {
                writeln!(writer, "{}", table_row(entry))?;
            }
        }
        OutputFormat::Jsonl => {
            for entry in entries {
                serde_json::to_writer(&mut writer, entry)?;
                writeln!(writer)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut writer, entries)?;
            writeln!(writer)?;
        }
    }
    writer.flush()
}
