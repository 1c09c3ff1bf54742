//! Text sample loading and grid export
//!
//! Samples are plain UTF-8 files with one grid row per line. Rows must all
//! have the same length and contain at least one symbol.

use crate::io::error::{GenerationError, Result};
use ndarray::Array2;
use std::path::Path;

/// Parse a rectangular character grid from text
///
/// A trailing newline is tolerated. Interior empty lines and ragged rows
/// are rejected.
///
/// # Errors
///
/// Returns an error if the text contains no rows, an empty row, or rows of
/// differing lengths.
pub fn parse_grid(text: &str) -> Result<Array2<char>> {
    let rows: Vec<Vec<char>> = text.lines().map(|line| line.chars().collect()).collect();

    if rows.is_empty() {
        return Err(GenerationError::InvalidSourceData {
            reason: "sample text contains no rows".to_string(),
        });
    }

    let width = rows.first().map_or(0, Vec::len);
    if width == 0 {
        return Err(GenerationError::InvalidSourceData {
            reason: "sample rows must contain at least one symbol".to_string(),
        });
    }

    let mut cells = Vec::with_capacity(rows.len() * width);
    for (index, row) in rows.iter().enumerate() {
        if row.len() != width {
            return Err(GenerationError::InvalidSourceData {
                reason: format!(
                    "row {} has {} symbols, expected {width}",
                    index + 1,
                    row.len()
                ),
            });
        }
        cells.extend(row.iter().copied());
    }

    let height = rows.len();
    Array2::from_shape_vec((height, width), cells).map_err(|error| {
        GenerationError::InvalidSourceData {
            reason: format!("sample shape is inconsistent: {error}"),
        }
    })
}

/// Load a sample grid from a text file
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content is not a
/// rectangular grid.
pub fn load_sample(path: &Path) -> Result<Array2<char>> {
    let content = std::fs::read_to_string(path).map_err(|error| GenerationError::FileSystem {
        path: path.to_path_buf(),
        operation: "read sample",
        source: error,
    })?;
    parse_grid(&content)
}

/// Write a symbol grid as text, one row per line
///
/// Parent directories are created as needed.
///
/// # Errors
///
/// Returns an error if a directory or the file itself cannot be written.
pub fn write_grid(grid: &Array2<char>, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|error| GenerationError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: error,
        })?;
    }

    let mut text = String::with_capacity(grid.nrows() * (grid.ncols() + 1));
    for row in grid.rows() {
        text.extend(row.iter());
        text.push('\n');
    }

    std::fs::write(path, text).map_err(|error| GenerationError::FileSystem {
        path: path.to_path_buf(),
        operation: "write output",
        source: error,
    })
}
