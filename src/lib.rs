//! keymap-fmt - Glove80 keymap layout formatter
//!
//! Finds the `keymap { ... }` block of a ZMK keymap, and rewrites each
//! layer's `bindings = < ... >;` list as a grid shaped like the keyboard.

pub mod bindings;
pub mod cli;
pub mod config;
pub mod config_paths;
pub mod error;
pub mod extract;
pub mod format;
pub mod layout;
pub mod rewrite;
pub mod runner;
pub mod tracing;

// Re-export commonly used types
pub use config::{FormatterConfig, LayerErrorPolicy, LayoutStyle};
pub use error::FormatError;
pub use format::format_layer;
pub use rewrite::{process_file, rewrite_keymap, FileOutcome, ProcessMode};
