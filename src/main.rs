use anyhow::Result;
use clap::Parser;
use wordfreqs::cli::setup::init_logging;
use wordfreqs::cli::{Cli, Commands};
use wordfreqs::commands::{self, CountConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.command.verbosity());

    match cli.command {
        Commands::Count {
            inputs,
            input_format,
            config,
            max_threshold,
            only_one,
            tokenizer,
            include_dictionary,
            dictionary,
            common_words,
            min_count,
            exclude,
            possessive,
            format,
            output,
            no_raw_data,
            raw_output,
            top,
            no_parallel,
            jobs,
            quiet,
            verbosity: _,
        } => commands::handle_count(CountConfig {
            inputs,
            input_format,
            config,
            max_threshold,
            only_one,
            tokenizer,
            include_dictionary,
            dictionary,
            common_words,
            min_count,
            exclude,
            possessive,
            format,
            output,
            no_raw_data,
            raw_output,
            top,
            no_parallel,
            jobs,
            quiet,
        }),
        Commands::Init { force } => commands::init_config(force),
    }
}
