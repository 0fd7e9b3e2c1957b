//! Rewriting a keymap file with every layer laid out as a grid
//!
//! Only the matched `bindings = < ... >;` lists inside the keymap block
//! change. Everything else is copied through byte for byte.

use std::fs;
use std::path::{Path, PathBuf};

use crate::bindings::find_binding_lists;
use crate::config::{FormatterConfig, LayerErrorPolicy};
use crate::error::FormatError;
use crate::extract::find_block;
use crate::format::format_layer;
use crate::layout::KEY_COUNT;

/// Result of rewriting keymap text in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub text: String,
    pub layers_formatted: usize,
    /// Lists left as written under [`LayerErrorPolicy::KeepOriginal`]
    pub layers_skipped: usize,
}

/// Whether `process_file` writes its result back
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProcessMode {
    #[default]
    Write,
    /// Compute the result but leave the file alone
    Check,
}

/// What happened to one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub layers_formatted: usize,
    pub layers_skipped: usize,
    /// The formatted text differs from what was on disk
    pub changed: bool,
}

/// Reformat every binding list inside the configured block
pub fn rewrite_keymap(text: &str, config: &FormatterConfig) -> Result<Rewrite, FormatError> {
    let spans = find_block(text, &config.block_name)?;
    let lists = find_binding_lists(spans.block);
    tracing::debug!(count = lists.len(), "Found binding lists");

    let closer_indent = " ".repeat(config.style.closer_indent);
    let mut block = String::with_capacity(spans.block.len() * 2);
    let mut layers_formatted = 0;
    let mut layers_skipped = 0;
    let mut cursor = 0;

    for (index, list) in lists.iter().enumerate() {
        block.push_str(&spans.block[cursor..list.range.start]);
        cursor = list.range.end;

        match format_layer(list.body, &config.style) {
            Ok(formatted) => {
                tracing::debug!(layer = index, keys = KEY_COUNT, "Formatted binding list");
                block.push_str(list.opener);
                block.push('\n');
                block.push_str(&formatted);
                block.push('\n');
                block.push_str(&closer_indent);
                block.push_str(list.closer);
                layers_formatted += 1;
            }
            Err(e) => {
                if config.on_layer_error == LayerErrorPolicy::Abort {
                    return Err(FormatError::Layer {
                        index,
                        source: Box::new(e),
                    });
                }
                tracing::warn!(layer = index, "Leaving binding list unformatted: {}", e);
                block.push_str(&spans.block[list.range.clone()]);
                layers_skipped += 1;
            }
        }
    }
    block.push_str(&spans.block[cursor..]);

    let mut text_out = String::with_capacity(spans.before.len() + block.len() + spans.after.len());
    text_out.push_str(spans.before);
    text_out.push_str(&block);
    text_out.push_str(spans.after);

    Ok(Rewrite {
        text: text_out,
        layers_formatted,
        layers_skipped,
    })
}

/// Read, reformat and (in [`ProcessMode::Write`]) overwrite one keymap file
///
/// The file is written only after every binding list has been handled, so
/// an error leaves it untouched.
pub fn process_file(
    path: &Path,
    config: &FormatterConfig,
    mode: ProcessMode,
) -> Result<FileOutcome, FormatError> {
    tracing::info!("Formatting {}", path.display());

    let original = fs::read_to_string(path).map_err(|e| FormatError::io(path, e))?;
    let rewrite = rewrite_keymap(&original, config)?;
    let changed = rewrite.text != original;

    match mode {
        ProcessMode::Write => {
            fs::write(path, &rewrite.text).map_err(|e| FormatError::io(path, e))?;
            tracing::info!(
                layers = rewrite.layers_formatted,
                changed,
                "Wrote {}",
                path.display()
            );
        }
        ProcessMode::Check => {
            if changed {
                tracing::info!("{} would be reformatted", path.display());
            }
        }
    }

    Ok(FileOutcome {
        path: path.to_path_buf(),
        layers_formatted: rewrite.layers_formatted,
        layers_skipped: rewrite.layers_skipped,
        changed,
    })
}
