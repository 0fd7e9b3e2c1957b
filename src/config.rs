//! Formatter configuration
//!
//! Read from `~/.config/keymap-fmt/config.yaml` when present. Every field
//! has a default, so a partial file only overrides what it names.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// What to do when a single binding list cannot be formatted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayerErrorPolicy {
    /// Fail the whole file; nothing is written
    #[default]
    Abort,
    /// Leave that list as written and keep formatting the others
    KeepOriginal,
}

/// Spacing used when rendering a layer grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutStyle {
    /// Spaces before the first column of every row
    pub line_indent: usize,
    /// Spaces added to the widest binding of each column
    pub column_padding: usize,
    /// Extra spaces after the thumb gap column
    pub thumb_gap: usize,
    /// Indentation of the closing `>;`
    pub closer_indent: usize,
}

impl Default for LayoutStyle {
    fn default() -> Self {
        Self {
            line_indent: 8,
            column_padding: 2,
            thumb_gap: 4,
            closer_indent: 8,
        }
    }
}

/// Formatter configuration that persists across runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatterConfig {
    /// Name of the block holding the layers
    #[serde(default = "default_block_name")]
    pub block_name: String,
    /// File used when no paths are given
    #[serde(default = "default_path")]
    pub default_path: PathBuf,
    #[serde(default)]
    pub on_layer_error: LayerErrorPolicy,
    #[serde(default)]
    pub style: LayoutStyle,
}

fn default_block_name() -> String {
    "keymap".to_string()
}

fn default_path() -> PathBuf {
    PathBuf::from("./config/glove80.keymap")
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            block_name: default_block_name(),
            default_path: default_path(),
            on_layer_error: LayerErrorPolicy::default(),
            style: LayoutStyle::default(),
        }
    }
}

impl FormatterConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::parse(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse config from a YAML string
    pub fn parse(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }
}
