//! Command-line argument parsing
//!
//! Supports:
//! - Formatting one or more keymap files in place
//! - Falling back to `./config/glove80.keymap` when no files are given
//! - Check mode for CI
//! - Continuing past failing files

use clap::Parser;
use std::path::PathBuf;

use crate::config::FormatterConfig;
use crate::error::FormatError;
use crate::rewrite::ProcessMode;

/// Align Glove80 keymap bindings into a keyboard-shaped grid
#[derive(Parser, Debug)]
#[command(name = "keymap-fmt", version, about = "Align Glove80 keymap bindings")]
pub struct CliArgs {
    /// Keymap files to reformat in place
    #[arg(value_name = "PATHS")]
    pub paths: Vec<PathBuf>,

    /// Report files that would change without writing them
    #[arg(long)]
    pub check: bool,

    /// Keep processing remaining files after one fails
    #[arg(long)]
    pub keep_going: bool,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Files to process, in order
    pub paths: Vec<PathBuf>,
    pub mode: ProcessMode,
    pub keep_going: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into a run configuration
    ///
    /// With no paths the configured default file is used, which must exist.
    pub fn into_run_config(self, config: &FormatterConfig) -> Result<RunConfig, FormatError> {
        let paths = if self.paths.is_empty() {
            if !config.default_path.exists() {
                return Err(FormatError::MissingDefaultFile {
                    path: config.default_path.clone(),
                });
            }
            vec![config.default_path.clone()]
        } else {
            self.paths
        };

        let mode = if self.check {
            ProcessMode::Check
        } else {
            ProcessMode::Write
        };

        Ok(RunConfig {
            paths,
            mode,
            keep_going: self.keep_going,
        })
    }
}
