//! Physical key layout of the Glove80
//!
//! The firmware lists a layer as 80 bindings in one flat sequence. This
//! module maps each flat key index onto an 18-column, 6-row visual grid:
//!
//! - Cols 0-5: left hand fingers
//! - Cols 6-8: left thumb cluster
//! - Cols 9-11: right thumb cluster
//! - Cols 12-17: right hand fingers
//!
//! ```text
//! | F1  | F2  | F3  | F4   | F5   |                                              | F6  | F7   | F8   | F9 | F10  |
//! | =   | 1   | 2   | 3    | 4    | 5  |                                  | 6   | 7   | 8    | 9    | 0  | -    |
//! | TAB | Q   | W   | E    | R    | T  |                                  | Y   | U   | I    | O    | P  | \    |
//! | ESC | A   | S   | D    | F    | G  |                                  | H   | J   | K    | L    | ;  | '    |
//! | `   | Z   | X   | C    | V    | B  | LSHFT | LCTRL | LOWER | LGUI | RCTRL | RSHFT | N | M | , | . | / | PGUP |
//! | MAG | HOME| END | LEFT | RIGHT|    | BSPC  | DEL   | LALT  | RALT | RET   | SPACE |   | UP | DOWN | [ | ] | PGDN |
//! ```

/// Number of rows in the visual grid
pub const GRID_ROWS: usize = 6;

/// Number of columns in the visual grid
pub const GRID_COLUMNS: usize = 18;

/// Number of bindings in one layer
pub const KEY_COUNT: usize = 80;

/// Column that gets the extra gap between the thumb clusters and the right hand
pub const THUMB_GAP_COLUMN: usize = 9;

/// Per row, `(flat key index, grid column)` pairs in flat index order.
/// Columns missing from a row are empty cells.
#[rustfmt::skip]
pub const ROW_MAPPINGS: [&[(usize, usize)]; GRID_ROWS] = [
    // Function row: F1-F5 and F6-F10, no inner keys
    &[
        (0, 0), (1, 1), (2, 2), (3, 3), (4, 4),
        (5, 13), (6, 14), (7, 15), (8, 16), (9, 17),
    ],
    &[
        (10, 0), (11, 1), (12, 2), (13, 3), (14, 4), (15, 5),
        (16, 12), (17, 13), (18, 14), (19, 15), (20, 16), (21, 17),
    ],
    &[
        (22, 0), (23, 1), (24, 2), (25, 3), (26, 4), (27, 5),
        (28, 12), (29, 13), (30, 14), (31, 15), (32, 16), (33, 17),
    ],
    &[
        (34, 0), (35, 1), (36, 2), (37, 3), (38, 4), (39, 5),
        (40, 12), (41, 13), (42, 14), (43, 15), (44, 16), (45, 17),
    ],
    // Every column is used: both hands plus the upper thumb keys
    &[
        (46, 0), (47, 1), (48, 2), (49, 3), (50, 4), (51, 5),
        (52, 6), (53, 7), (54, 8),
        (55, 9), (56, 10), (57, 11),
        (58, 12), (59, 13), (60, 14), (61, 15), (62, 16), (63, 17),
    ],
    // Bottom row has no innermost finger keys (cols 5 and 12)
    &[
        (64, 0), (65, 1), (66, 2), (67, 3), (68, 4),
        (69, 6), (70, 7), (71, 8),
        (72, 9), (73, 10), (74, 11),
        (75, 13), (76, 14), (77, 15), (78, 16), (79, 17),
    ],
];

/// Grid `(row, column)` of a flat key index, if the keyboard has that key
pub fn position_of(index: usize) -> Option<(usize, usize)> {
    ROW_MAPPINGS.iter().enumerate().find_map(|(row, mapping)| {
        mapping
            .iter()
            .find(|(key, _)| *key == index)
            .map(|&(_, column)| (row, column))
    })
}

/// Flat key indices of a row, in column order
pub fn keys_in_row(row: usize) -> Vec<usize> {
    let Some(mapping) = ROW_MAPPINGS.get(row) else {
        return Vec::new();
    };
    let mut pairs = mapping.to_vec();
    pairs.sort_by_key(|&(_, column)| column);
    pairs.into_iter().map(|(key, _)| key).collect()
}
