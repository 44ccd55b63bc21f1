use std::io::Write;

use clap::ValueEnum;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use serde::{Deserialize, Serialize};

use crate::aggregation::FrequencyReport;

/// Rendering of the ranked word list
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `word:count` per line
    #[default]
    Lines,
    /// Each word repeated `count` times, space separated
    Repeat,
    /// Pretty JSON report with summary
    Json,
    /// Table for reading in a terminal
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &FrequencyReport) -> anyhow::Result<()>;
}

pub struct LinesWriter<W: Write> {
    writer: W,
}

impl<W: Write> LinesWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for LinesWriter<W> {
    fn write_report(&mut self, report: &FrequencyReport) -> anyhow::Result<()> {
        self.writer.write_all(report.lines().as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}

pub struct RepeatWriter<W: Write> {
    writer: W,
}

impl<W: Write> RepeatWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for RepeatWriter<W> {
    fn write_report(&mut self, report: &FrequencyReport) -> anyhow::Result<()> {
        let text = report.repeated();
        self.writer.write_all(text.as_bytes())?;
        if !text.is_empty() {
            writeln!(self.writer)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &FrequencyReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &FrequencyReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        writeln!(self.writer, "{}", build_table(report))?;
        self.write_summary(report)?;
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn write_header(&mut self, report: &FrequencyReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Word Frequencies".bold())?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.summary.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, report: &FrequencyReport) -> anyhow::Result<()> {
        let summary = &report.summary;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "  Blocks: {} ({} empty)",
            summary.blocks_seen,
            summary.blocks_skipped.to_string().dimmed()
        )?;
        writeln!(self.writer, "  Tokens: {}", summary.tokens_seen)?;
        writeln!(
            self.writer,
            "  Tokenizer: {}, fold mode: {}, max threshold: {:.2}",
            summary.tokenizer.name(),
            summary.fold_mode.name(),
            summary.max_threshold
        )?;
        writeln!(
            self.writer,
            "  Rejected as spam: {}",
            summary.words_rejected.to_string().yellow()
        )?;
        writeln!(
            self.writer,
            "  Distinct words: {} before merge, {} merges, {} shown",
            summary.distinct_before_merge,
            summary.merges_applied,
            summary.words_emitted.to_string().green()
        )?;
        Ok(())
    }
}

fn build_table(report: &FrequencyReport) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Word", "Count"]);

    for (rank, entry) in report.words.iter().enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1).set_alignment(CellAlignment::Right),
            Cell::new(&entry.word),
            Cell::new(entry.count).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn create_writer<'a>(
    format: OutputFormat,
    writer: Box<dyn Write + 'a>,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Lines => Box::new(LinesWriter::new(writer)),
        OutputFormat::Repeat => Box::new(RepeatWriter::new(writer)),
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}
