//! CLI command implementations.
//!
//! - **count**: aggregate word frequencies across input files
//! - **init**: write a default `.wordfreqs.toml`

pub mod count;
pub mod init;

pub use count::{apply_overrides, handle_count, CountConfig};
pub use init::init_config;
