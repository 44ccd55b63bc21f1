pub mod setup;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::aggregation::TokenizerKind;
use crate::io::{InputFormat, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "wordfreqs")]
#[command(about = "Word frequency tables for word clouds", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum TokenizerArg {
    /// Word pattern with contractions; drops links and possessive 's
    Regex,
    /// Trim punctuation and digits from each whitespace-separated piece
    Simple,
}

impl From<TokenizerArg> for TokenizerKind {
    fn from(arg: TokenizerArg) -> Self {
        match arg {
            TokenizerArg::Regex => TokenizerKind::Regex,
            TokenizerArg::Simple => TokenizerKind::Simple,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count word frequencies across text files
    Count {
        /// Input files
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Layout of the input files
        #[arg(long = "input-format", value_enum, default_value = "text")]
        input_format: InputFormat,

        /// Configuration file (defaults to the nearest .wordfreqs.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Maximum relative frequency a word may have within one block and
        /// still be counted (prevents single-block spam)
        #[arg(short = 'm', long = "max-threshold")]
        max_threshold: Option<f64>,

        /// Count a word at most once per block
        #[arg(short = 'o', long = "only-one")]
        only_one: bool,

        /// Tokenization strategy
        #[arg(long, value_enum)]
        tokenizer: Option<TokenizerArg>,

        /// Also ignore every word in the dictionary
        #[arg(short = 'i', long = "include-dictionary")]
        include_dictionary: bool,

        /// Dictionary word list used with --include-dictionary
        #[arg(long)]
        dictionary: Option<PathBuf>,

        /// Replace the built-in common-words list
        #[arg(long = "common-words")]
        common_words: Option<PathBuf>,

        /// Words with a count at or below this are dropped
        #[arg(long = "min-count")]
        min_count: Option<u64>,

        /// Additional substrings that exclude a word (comma-separated)
        #[arg(long = "exclude", value_delimiter = ',')]
        exclude: Option<Vec<String>>,

        /// Also merge possessive forms (word's) into their base word
        #[arg(long)]
        possessive: bool,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Disable the raw word count output file
        #[arg(short = 'r', long = "no-raw-data")]
        no_raw_data: bool,

        /// Raw word count output file (defaults to raw-<output> beside --output)
        #[arg(long = "raw-output")]
        raw_output: Option<PathBuf>,

        /// Show only the top N words
        #[arg(long = "top", visible_alias = "head")]
        top: Option<usize>,

        /// Count blocks on a single thread
        #[arg(long = "no-parallel")]
        no_parallel: bool,

        /// Number of worker threads (0 = one per core)
        #[arg(short = 'j', long = "jobs")]
        jobs: Option<usize>,

        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    pub fn verbosity(&self) -> u8 {
        match self {
            Commands::Count { verbosity, .. } => *verbosity,
            Commands::Init { .. } => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_count_flags() {
        let cli = Cli::parse_from([
            "wordfreqs",
            "count",
            "a.txt",
            "b.txt",
            "-m",
            "0.5",
            "-o",
            "--tokenizer",
            "simple",
            "--exclude",
            "lol,rofl",
            "-vv",
        ]);
        match cli.command {
            Commands::Count {
                inputs,
                max_threshold,
                only_one,
                tokenizer,
                exclude,
                verbosity,
                ..
            } => {
                assert_eq!(inputs.len(), 2);
                assert_eq!(max_threshold, Some(0.5));
                assert!(only_one);
                assert_eq!(tokenizer, Some(TokenizerArg::Simple));
                assert_eq!(exclude, Some(vec!["lol".to_string(), "rofl".to_string()]));
                assert_eq!(verbosity, 2);
            }
            Commands::Init { .. } => panic!("expected count"),
        }
    }

    #[test]
    fn test_count_requires_inputs() {
        assert!(Cli::try_parse_from(["wordfreqs", "count"]).is_err());
    }
}
