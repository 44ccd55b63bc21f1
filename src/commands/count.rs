use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::aggregation::{AggregationSession, Entry, FoldMode, FrequencyReport, TextBlock};
use crate::cli::setup::configure_thread_pool;
use crate::cli::TokenizerArg;
use crate::config::{self, WordFreqsConfig};
use crate::io::{self, create_writer, InputFormat, OutputFormat};
use crate::progress::{ProgressConfig, TEMPLATE_BLOCKS, TEMPLATE_ENTRIES};

/// Arguments of the `count` command
#[derive(Debug, Clone, Default)]
pub struct CountConfig {
    pub inputs: Vec<PathBuf>,
    pub input_format: InputFormat,
    pub config: Option<PathBuf>,
    pub max_threshold: Option<f64>,
    pub only_one: bool,
    pub tokenizer: Option<TokenizerArg>,
    pub include_dictionary: bool,
    pub dictionary: Option<PathBuf>,
    pub common_words: Option<PathBuf>,
    pub min_count: Option<u64>,
    pub exclude: Option<Vec<String>>,
    pub possessive: bool,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub no_raw_data: bool,
    pub raw_output: Option<PathBuf>,
    pub top: Option<usize>,
    pub no_parallel: bool,
    pub jobs: Option<usize>,
    pub quiet: bool,
}

pub fn handle_count(args: CountConfig) -> Result<()> {
    let file_config = match &args.config {
        Some(path) => config::load_config_from_path(path)?,
        None => config::load_config(),
    };
    let settings = apply_overrides(file_config, &args);

    // Fail fast: nothing is read or counted with an invalid configuration
    let engine_config = settings.engine_config()?;
    let stopwords = settings
        .stopwords
        .load()
        .context("Failed to load stopwords")?;

    let entries = read_all_entries(&args.inputs, args.input_format)?;
    let progress = ProgressConfig::from_env(args.quiet);

    let mut session = AggregationSession::new(engine_config, stopwords);
    if settings.aggregation.parallel {
        configure_thread_pool(settings.aggregation.jobs);
        let blocks: Vec<TextBlock<'_>> =
            entries.iter().flat_map(|entry| entry.blocks()).collect();
        let pb = progress.create_bar(blocks.len() as u64, TEMPLATE_BLOCKS, "Counting");
        session.process_blocks_parallel(&blocks, Some(&pb));
        pb.finish_and_clear();
    } else {
        let pb = progress.create_bar(entries.len() as u64, TEMPLATE_ENTRIES, "Counting");
        for entry in &entries {
            session.process_entry(entry);
            pb.inc(1);
        }
        pb.finish_and_clear();
    }

    let stats = session.stats();
    log::info!(
        "Processed {} blocks ({} empty, {} tokens)",
        stats.blocks_seen,
        stats.blocks_skipped,
        stats.tokens_seen
    );

    let mut report = session.finish()?;
    if let Some(top) = settings.output.top {
        report.truncate(top);
    }

    write_report(&report, settings.output.format, args.output.as_ref())?;
    if settings.output.raw {
        write_raw_report(&report, args.output.as_ref(), args.raw_output.as_ref())?;
    }
    Ok(())
}

/// Layer CLI flags over the file configuration
pub fn apply_overrides(mut config: WordFreqsConfig, args: &CountConfig) -> WordFreqsConfig {
    if let Some(threshold) = args.max_threshold {
        config.aggregation.max_threshold = threshold;
    }
    if args.only_one {
        config.aggregation.fold_mode = FoldMode::Presence;
    }
    if let Some(tokenizer) = args.tokenizer {
        config.aggregation.tokenizer = tokenizer.into();
    }
    if args.no_parallel {
        config.aggregation.parallel = false;
    }
    if let Some(jobs) = args.jobs {
        config.aggregation.jobs = jobs;
    }

    if args.include_dictionary {
        config.stopwords.strict = true;
    }
    if let Some(dictionary) = &args.dictionary {
        config.stopwords.dictionary = dictionary.clone();
    }
    if let Some(common_words) = &args.common_words {
        config.stopwords.common_words = Some(common_words.clone());
    }

    if args.possessive {
        config.merge.possessive = true;
    }

    if let Some(min_count) = args.min_count {
        config.output.min_count = min_count;
    }
    if let Some(extra) = &args.exclude {
        config.output.exclusions.extend(extra.iter().cloned());
    }
    if let Some(format) = args.format {
        config.output.format = format;
    }
    if args.no_raw_data {
        config.output.raw = false;
    }
    if args.top.is_some() {
        config.output.top = args.top;
    }
    config
}

fn read_all_entries(inputs: &[PathBuf], format: InputFormat) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();
    for path in inputs {
        let mut from_file = io::read_entries(path, format)
            .with_context(|| format!("Failed to read input {}", path.display()))?;
        entries.append(&mut from_file);
    }
    Ok(entries)
}

fn write_report(
    report: &FrequencyReport,
    format: OutputFormat,
    output: Option<&PathBuf>,
) -> Result<()> {
    let writer: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(std::io::stdout().lock()),
    };
    create_writer(format, writer).write_report(report)
}

fn write_raw_report(
    report: &FrequencyReport,
    output: Option<&PathBuf>,
    raw_output: Option<&PathBuf>,
) -> Result<()> {
    let path = match (raw_output, output) {
        (Some(raw), _) => raw.clone(),
        (None, Some(output)) => io::raw_output_path(output),
        (None, None) => {
            log::debug!("Raw word counts not written: no output file given");
            return Ok(());
        }
    };
    io::write_file(&path, &report.raw_lines())?;
    log::info!("Wrote raw word counts to {}", path.display());
    Ok(())
}
