use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG: &str = r#"# wordfreqs configuration

[aggregation]
# A word taking more than this share of one block is not counted for that block
max_threshold = 0.34
# "count" adds every occurrence, "presence" adds one per block
fold_mode = "count"
# "regex" or "simple"
tokenizer = "regex"
parallel = true
jobs = 0

[stopwords]
# Also ignore every word of the dictionary below
strict = false
dictionary = "/usr/share/dict/words"
extra = []

[merge]
# Fold "word's" into "word" as well as plurals
possessive = false

[output]
min_count = 5
exclusions = [
    "http://",
    "https://",
    "r/",
    "u/",
    "...",
    "--",
    "deleted",
    "k/year",
    ")x",
    "amp;c",
]
# "lines", "repeat", "json" or "terminal"
format = "lines"
raw = true
"#;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    write_default_config(&config_path, force)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);
    Ok(())
}

pub fn write_default_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }
    io::write_file(config_path, DEFAULT_CONFIG)
}
