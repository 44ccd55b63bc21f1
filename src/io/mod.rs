pub mod input;
pub mod output;

pub use input::{parse_jsonl, parse_text, read_entries, InputFormat};
pub use output::{create_writer, OutputFormat, OutputWriter};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Default location of the raw all-words export: `raw-<name>` beside `output`.
pub fn raw_output_path(output: &Path) -> PathBuf {
    let name = output
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output.txt".to_string());
    output.with_file_name(format!("raw-{name}"))
}
