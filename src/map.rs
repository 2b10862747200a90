//! Map loading.
//!
//! A map is text with one grid row per line, each cell a single character color separated by whitespace:
//!
//! ```text
//! r g g r
//! g g r g
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use na::DMatrix;
use nalgebra as na;

use crate::error::HistogramError;
use crate::grid::ColorGrid;

/// Parses map text into a rectangular color grid.
///
/// Blank lines are skipped. Tokens longer than one character and rows of differing length are errors,
/// rows are never padded or truncated.
pub fn parse_map(text: &str) -> Result<ColorGrid, HistogramError> {
    let mut cells = Vec::new();
    let mut width = None;
    let mut height = 0;

    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        let row = line
            .split_whitespace()
            .map(|token| {
                let mut chars = token.chars();
                match (chars.next(), chars.next()) {
                    (Some(color), None) => Ok(color),
                    _ => Err(HistogramError::InvalidToken {
                        line: line_no,
                        token: token.to_string(),
                    }),
                }
            })
            .collect::<Result<Vec<char>, _>>()?;
        if row.is_empty() {
            continue;
        }

        let expected = *width.get_or_insert(row.len());
        if row.len() != expected {
            return Err(HistogramError::RaggedRow {
                line: line_no,
                expected,
                got: row.len(),
            });
        }
        cells.extend(row);
        height += 1;
    }

    match width {
        Some(width) => Ok(DMatrix::from_row_slice(height, width, &cells)),
        None => Err(HistogramError::EmptyGrid),
    }
}

/// Reads and parses a map file.
pub fn read_map<P: AsRef<Path>>(path: P) -> Result<ColorGrid, HistogramError> {
    let path = path.as_ref();
    let map = parse_map(&fs::read_to_string(path)?)?;
    debug!("read map {} ({}x{})", path.display(), map.nrows(), map.ncols());
    Ok(map)
}

/// Distinct colors present in a map, in order of first appearance (row-major).
pub fn colors(map: &ColorGrid) -> Vec<char> {
    let mut found = Vec::new();
    for i in 0..map.nrows() {
        for j in 0..map.ncols() {
            let color = map[(i, j)];
            if !found.contains(&color) {
                found.push(color);
            }
        }
    }
    found
}
