// Configuration: TOML file types, discovery, and the validated engine settings
mod core;
mod engine;
mod loader;

pub use self::core::{
    AggregationSettings, MergeSettings, OutputSettings, StopwordSettings, WordFreqsConfig,
};
pub use engine::{EngineConfig, EngineConfigBuilder, DEFAULT_MAX_THRESHOLD};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from_path, parse_config,
    CONFIG_FILE_NAME,
};
