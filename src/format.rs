//! Layer formatting: flat binding list in, aligned grid text out
//!
//! A layer's raw text is split into binding tokens, each token is placed
//! on the visual grid from [`crate::layout`], and every column is padded
//! to its widest token so the rows line up like the physical keyboard.

use crate::config::LayoutStyle;
use crate::error::FormatError;
use crate::layout::{GRID_COLUMNS, GRID_ROWS, KEY_COUNT, ROW_MAPPINGS, THUMB_GAP_COLUMN};

/// Every binding starts with this character
pub const TOKEN_MARKER: char = '&';

/// Split raw binding text into `&`-prefixed tokens
///
/// Newlines and tabs become spaces, fragments between markers are
/// trimmed, and empty fragments (including text before the first
/// marker) are dropped.
pub fn split_tokens(raw: &str) -> Vec<String> {
    raw.replace(&['\n', '\t'][..], " ")
        .split(TOKEN_MARKER)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(|fragment| format!("{}{}", TOKEN_MARKER, fragment))
        .collect()
}

/// Format one layer's raw binding text as grid lines
pub fn format_layer(raw: &str, style: &LayoutStyle) -> Result<String, FormatError> {
    let tokens = split_tokens(raw);
    if tokens.len() != KEY_COUNT {
        return Err(FormatError::wrong_token_count(tokens.len(), KEY_COUNT, raw));
    }

    let grid = Grid::place(&tokens)?;
    Ok(grid.render(style))
}

/// A 6x18 grid of binding tokens, empty strings where the keyboard has no key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<String>>,
}

impl Grid {
    fn empty() -> Self {
        Self {
            cells: vec![vec![String::new(); GRID_COLUMNS]; GRID_ROWS],
        }
    }

    /// Place tokens by flat key index using the layout table
    pub fn place(tokens: &[String]) -> Result<Self, FormatError> {
        let mut grid = Self::empty();
        for (row, mapping) in ROW_MAPPINGS.iter().enumerate() {
            for &(key, column) in mapping.iter() {
                let token = tokens.get(key).ok_or(FormatError::KeyIndexOutOfRange {
                    index: key,
                    len: tokens.len(),
                })?;
                grid.cells[row][column] = token.clone();
            }
        }
        Ok(grid)
    }

    #[cfg(test)]
    fn cell(&self, row: usize, column: usize) -> &str {
        &self.cells[row][column]
    }

    /// Rendered width of each column: its widest token plus `padding`
    pub fn column_widths(&self, padding: usize) -> [usize; GRID_COLUMNS] {
        let mut widths = [padding; GRID_COLUMNS];
        for row in &self.cells {
            for (column, token) in row.iter().enumerate() {
                widths[column] = widths[column].max(token.chars().count() + padding);
            }
        }
        widths
    }

    /// Render rows joined by newlines, each column left-justified to its width
    pub fn render(&self, style: &LayoutStyle) -> String {
        let widths = self.column_widths(style.column_padding);
        let indent = " ".repeat(style.line_indent);
        let gap = " ".repeat(style.thumb_gap);

        self.cells
            .iter()
            .map(|row| {
                let mut line = indent.clone();
                for (column, token) in row.iter().enumerate() {
                    line.push_str(&format!("{:<width$}", token, width = widths[column]));
                    if column == THUMB_GAP_COLUMN {
                        line.push_str(&gap);
                    }
                }
                line
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered_layer() -> Vec<String> {
        (0..KEY_COUNT).map(|i| format!("&kp K{}", i)).collect()
    }

    #[test]
    fn test_split_tokens_multiline() {
        let raw = "\n\t&kp A  &kp B\n        &mo 1\t&trans\n    ";
        assert_eq!(split_tokens(raw), vec!["&kp A", "&kp B", "&mo 1", "&trans"]);
    }

    #[test]
    fn test_split_tokens_drops_leading_text() {
        assert_eq!(split_tokens("  &none"), vec!["&none"]);
        assert!(split_tokens("   \n ").is_empty());
    }

    #[test]
    fn test_split_tokens_normalizes_inner_tabs() {
        assert_eq!(split_tokens("&kp\tLS(A)"), vec!["&kp LS(A)"]);
    }

    #[test]
    fn test_place_corner_keys() {
        let grid = Grid::place(&numbered_layer()).unwrap();
        assert_eq!(grid.cell(0, 0), "&kp K0");
        assert_eq!(grid.cell(0, 17), "&kp K9");
        assert_eq!(grid.cell(4, 0), "&kp K46");
        assert_eq!(grid.cell(4, 17), "&kp K63");
        assert_eq!(grid.cell(5, 5), "");
        assert_eq!(grid.cell(5, 12), "");
        assert_eq!(grid.cell(0, 9), "");
    }

    #[test]
    fn test_place_short_token_list() {
        let tokens: Vec<String> = numbered_layer().into_iter().take(40).collect();
        let err = Grid::place(&tokens).unwrap_err();
        assert_eq!(err, FormatError::KeyIndexOutOfRange { index: 40, len: 40 });
    }

    #[test]
    fn test_column_widths_use_widest_token() {
        let mut tokens = numbered_layer();
        tokens[46] = "&mt LCTRL ESCAPE".to_string();
        let grid = Grid::place(&tokens).unwrap();
        let widths = grid.column_widths(2);
        assert_eq!(widths[0], "&mt LCTRL ESCAPE".len() + 2);
        // Column 6 only holds thumb keys 52 and 69
        assert_eq!(widths[6], "&kp K52".len() + 2);
    }

    #[test]
    fn test_column_widths_count_chars() {
        let mut tokens = numbered_layer();
        tokens[0] = "&kp É".to_string();
        tokens[10] = "&kp A".to_string();
        tokens[22] = "&kp A".to_string();
        tokens[34] = "&kp A".to_string();
        tokens[46] = "&kp A".to_string();
        tokens[64] = "&kp A".to_string();
        let grid = Grid::place(&tokens).unwrap();
        assert_eq!(grid.column_widths(2)[0], 7);
    }

    #[test]
    fn test_render_uniform_tokens() {
        let raw = "&kp A ".repeat(KEY_COUNT);
        let formatted = format_layer(&raw, &LayoutStyle::default()).unwrap();
        let lines: Vec<&str> = formatted.lines().collect();
        assert_eq!(lines.len(), GRID_ROWS);

        let key = "&kp A  ";
        let expected_top = format!(
            "{}{}{}{}",
            " ".repeat(8),
            key.repeat(5),
            " ".repeat(7 * 8 + 4),
            key.repeat(5)
        );
        assert_eq!(lines[0], expected_top);

        let expected_thumbs = format!("{}{}{}{}", " ".repeat(8), key.repeat(10), "    ", key.repeat(8));
        assert_eq!(lines[4], expected_thumbs);
    }

    #[test]
    fn test_rows_follow_layout_order() {
        let formatted = format_layer(&numbered_layer().join(" "), &LayoutStyle::default()).unwrap();
        for (row, line) in formatted.lines().enumerate() {
            let found: Vec<String> = split_tokens(line);
            let expected: Vec<String> = crate::layout::keys_in_row(row)
                .into_iter()
                .map(|key| format!("&kp K{}", key))
                .collect();
            assert_eq!(found, expected, "row {}", row);
        }
    }

    #[test]
    fn test_wrong_token_count() {
        let raw = "&kp A ".repeat(79);
        let err = format_layer(&raw, &LayoutStyle::default()).unwrap_err();
        assert!(matches!(
            err,
            FormatError::WrongTokenCount {
                found: 79,
                expected: 80,
                ..
            }
        ));

        let raw = "&kp A ".repeat(81);
        assert!(format_layer(&raw, &LayoutStyle::default()).is_err());
    }

    #[test]
    fn test_custom_style() {
        let style = LayoutStyle {
            line_indent: 4,
            column_padding: 1,
            thumb_gap: 0,
            closer_indent: 4,
        };
        let raw = "&kp A ".repeat(KEY_COUNT);
        let formatted = format_layer(&raw, &style).unwrap();
        let thumbs = formatted.lines().nth(4).unwrap();
        assert_eq!(thumbs, format!("    {}", "&kp A ".repeat(18)));
    }
}
