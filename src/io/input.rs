//! Reading local corpora into entries.
//!
//! Two layouts are understood: plain text, where every paragraph is one
//! comment, and JSON Lines, where every line is a tagged [`Entry`].

use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::aggregation::Entry;
use crate::errors::{Error, Result};

/// Layout of an input file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// Paragraphs separated by blank lines, each one a comment
    #[default]
    Text,
    /// One JSON entry per line
    Jsonl,
}

/// Split plain text into paragraph comments.
pub fn parse_text(contents: &str) -> Vec<Entry> {
    let mut entries = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();

    for line in contents.lines() {
        if line.trim().is_empty() {
            flush_paragraph(&mut paragraph, &mut entries);
        } else {
            paragraph.push(line);
        }
    }
    flush_paragraph(&mut paragraph, &mut entries);
    entries
}

fn flush_paragraph(paragraph: &mut Vec<&str>, entries: &mut Vec<Entry>) {
    if paragraph.is_empty() {
        return;
    }
    entries.push(Entry::Comment {
        body: paragraph.join("\n"),
    });
    paragraph.clear();
}

/// Decode one entry per non-blank line. `path` is only used in errors.
pub fn parse_jsonl(contents: &str, path: &Path) -> Result<Vec<Entry>> {
    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str::<Entry>(line).map_err(|e| Error::MalformedInput {
                path: path.to_path_buf(),
                line: index + 1,
                message: e.to_string(),
            })
        })
        .collect()
}

/// Read and decode one input file.
pub fn read_entries(path: &Path, format: InputFormat) -> Result<Vec<Entry>> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| Error::io_with_path("Failed to read input", path, e))?;
    let entries = match format {
        InputFormat::Text => parse_text(&contents),
        InputFormat::Jsonl => parse_jsonl(&contents, path)?,
    };
    log::info!("Read {} entries from {}", entries.len(), path.display());
    Ok(entries)
}
