//! Finding `bindings = < ... >;` lists inside a keymap block

use std::ops::Range;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref BINDINGS_RE: Regex = Regex::new(r"(bindings\s*=\s*<)([^>]+)(>;)").unwrap();
}

/// One matched binding list, borrowed from the block text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingList<'a> {
    /// Byte range of the whole match within the searched text
    pub range: Range<usize>,
    /// `bindings = <` as written in the source
    pub opener: &'a str,
    /// Raw text between the angle brackets
    pub body: &'a str,
    /// `>;`
    pub closer: &'a str,
}

/// All binding lists in `block`, in source order. No match is not an error.
pub fn find_binding_lists(block: &str) -> Vec<BindingList<'_>> {
    BINDINGS_RE
        .captures_iter(block)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(BindingList {
                range: whole.range(),
                opener: caps.get(1)?.as_str(),
                body: caps.get(2)?.as_str(),
                closer: caps.get(3)?.as_str(),
            })
        })
        .collect()
}
