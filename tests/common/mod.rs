//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use keymap_fmt::bindings::find_binding_lists;
use keymap_fmt::extract::find_block;
use keymap_fmt::format::split_tokens;
use tempfile::TempDir;

/// Realistic three-layer Glove80 keymap, unformatted
pub const SAMPLE_KEYMAP: &str = include_str!("../../samples/glove80.keymap");

/// 80 distinct placeholder bindings: `&kp K0` .. `&kp K79`
pub fn numbered_tokens() -> Vec<String> {
    (0..80).map(|i| format!("&kp K{}", i)).collect()
}

/// `count` placeholder bindings on one line
pub fn numbered_layer(count: usize) -> String {
    (0..count)
        .map(|i| format!("&kp K{}", i))
        .collect::<Vec<_>>()
        .join(" ")
}

/// A minimal keymap with one layer per entry of `layers`
pub fn keymap_with_layers(layers: &[String]) -> String {
    let mut text = String::from("/ {\n    keymap {\n        compatible = \"zmk,keymap\";\n");
    for (i, layer) in layers.iter().enumerate() {
        text.push_str(&format!(
            "\n        layer_{} {{\n            bindings = <\n                {}\n            >;\n        }};\n",
            i, layer
        ));
    }
    text.push_str("    };\n};\n");
    text
}

/// Write `content` to a fresh keymap file inside a temp dir
pub fn write_keymap(content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("glove80.keymap");
    fs::write(&path, content).unwrap();
    (dir, path)
}

/// Token sequence of every binding list inside the keymap block
pub fn layer_tokens(text: &str) -> Vec<Vec<String>> {
    let spans = find_block(text, "keymap").unwrap();
    find_binding_lists(spans.block)
        .iter()
        .map(|list| split_tokens(list.body))
        .collect()
}

/// Grid lines of every formatted binding list inside the keymap block
pub fn layer_lines(text: &str) -> Vec<Vec<String>> {
    let spans = find_block(text, "keymap").unwrap();
    find_binding_lists(spans.block)
        .iter()
        .map(|list| {
            list.body
                .trim_start_matches('\n')
                .trim_end_matches(' ')
                .trim_end_matches('\n')
                .lines()
                .map(str::to_string)
                .collect()
        })
        .collect()
}
