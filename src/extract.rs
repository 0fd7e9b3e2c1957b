//! Locating a named, brace-delimited block in keymap source
//!
//! This is a plain brace counter, not a devicetree parser: braces inside
//! comments or strings are counted like any other.

use crate::error::FormatError;

/// A file split around one named block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSpans<'a> {
    /// Everything before the block name
    pub before: &'a str,
    /// The block from its name through the matching closing brace
    pub block: &'a str,
    /// Everything after the closing brace
    pub after: &'a str,
}

/// Find the first `name {` block in `text` and split the text around it
pub fn find_block<'a>(text: &'a str, name: &str) -> Result<BlockSpans<'a>, FormatError> {
    let (start, open) = find_opener(text, name).ok_or_else(|| FormatError::BlockNotFound {
        name: name.to_string(),
    })?;

    let end = matching_brace(text, open).ok_or_else(|| FormatError::UnterminatedBlock {
        name: name.to_string(),
        offset: open,
    })?;

    Ok(BlockSpans {
        before: &text[..start],
        block: &text[start..end],
        after: &text[end..],
    })
}

/// Byte offsets of the block name and of its opening brace
fn find_opener(text: &str, name: &str) -> Option<(usize, usize)> {
    if name.is_empty() {
        return None;
    }
    text.match_indices(name).find_map(|(start, _)| {
        let rest = &text[start + name.len()..];
        let trimmed = rest.trim_start();
        trimmed
            .starts_with('{')
            .then(|| (start, text.len() - trimmed.len()))
    })
}

/// Offset just past the brace that closes the one at `open`
fn matching_brace(text: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (offset, byte) in text.as_bytes()[open..].iter().enumerate() {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(open + offset + 1);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_around_block() {
        let text = "/ {\n    keymap {\n        a { };\n    };\n};\n";
        let spans = find_block(text, "keymap").unwrap();
        assert_eq!(spans.before, "/ {\n    ");
        assert_eq!(spans.block, "keymap {\n        a { };\n    }");
        assert_eq!(spans.after, ";\n};\n");
        assert_eq!(
            format!("{}{}{}", spans.before, spans.block, spans.after),
            text
        );
    }

    #[test]
    fn test_block_without_space_before_brace() {
        let spans = find_block("x keymap{} y", "keymap").unwrap();
        assert_eq!(spans.before, "x ");
        assert_eq!(spans.block, "keymap{}");
        assert_eq!(spans.after, " y");
    }

    #[test]
    fn test_whitespace_between_name_and_brace() {
        let text = "keymap \n\t {}";
        let spans = find_block(text, "keymap").unwrap();
        assert_eq!(spans.block, text);
    }

    #[test]
    fn test_skips_name_without_brace() {
        let text = "#define keymap_layer 1\nkeymap { };";
        let spans = find_block(text, "keymap").unwrap();
        assert_eq!(spans.block, "keymap { }");
        assert_eq!(spans.after, ";");
    }

    #[test]
    fn test_missing_block() {
        let err = find_block("behaviors { };", "keymap").unwrap_err();
        assert_eq!(
            err,
            FormatError::BlockNotFound {
                name: "keymap".to_string()
            }
        );
    }

    #[test]
    fn test_unterminated_block() {
        let err = find_block("keymap { layer { };", "keymap").unwrap_err();
        assert_eq!(
            err,
            FormatError::UnterminatedBlock {
                name: "keymap".to_string(),
                offset: 7
            }
        );
    }

    #[test]
    fn test_nested_braces_counted() {
        let text = "keymap { a { b { } } } tail";
        let spans = find_block(text, "keymap").unwrap();
        assert_eq!(spans.after, " tail");
    }
}
