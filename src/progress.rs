//! Progress feedback while aggregating.
//!
//! Progress bars are drawn on stderr so they never mix with the word list on
//! stdout.
//!
//! # Progress Behavior
//!
//! - **Quiet Mode**: No progress output (respects `WORDFREQS_QUIET` env var and `--quiet` flag)
//! - **Non-TTY**: Gracefully disables progress bars in CI and piped output

use indicatif::{ProgressBar, ProgressStyle};

// Progress bar templates
pub const TEMPLATE_BLOCKS: &str = "{msg} {pos}/{len} blocks ({percent}%) - {per_sec} - {eta}";
pub const TEMPLATE_ENTRIES: &str = "{msg} {pos}/{len} entries ({percent}%) - {eta}";

/// Configuration for progress display behavior
#[derive(Debug, Clone, Default)]
pub struct ProgressConfig {
    /// Whether to suppress all progress output
    pub quiet_mode: bool,
}

impl ProgressConfig {
    /// Create progress configuration from environment and CLI arguments
    pub fn from_env(quiet: bool) -> Self {
        let env_quiet = std::env::var("WORDFREQS_QUIET").is_ok();
        Self {
            quiet_mode: quiet || env_quiet,
        }
    }

    /// Determine if progress bars should be displayed
    pub fn should_show_progress(&self) -> bool {
        if self.quiet_mode {
            return false;
        }

        use std::io::IsTerminal;
        std::io::stderr().is_terminal()
    }

    /// Create a progress bar with the given length and template
    ///
    /// Returns a hidden progress bar if progress should not be shown
    pub fn create_bar(&self, len: u64, template: &str, msg: &str) -> ProgressBar {
        if !self.should_show_progress() {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(template)
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░  "),
        );
        pb.set_message(msg.to_string());
        pb
    }
}
