// In: src/map/level.rs

//! The line-oriented level grid: one text line per map row, one character
//! per tile. The grid must be rectangular; ragged or empty input is rejected
//! up front so the build step never discovers it halfway through a stitch.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::TiletgaError;
use crate::Result;

/// A validated rectangular grid of tile codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelGrid {
    rows: Vec<String>,
    width: usize,
}

impl LevelGrid {
    /// Builds a grid from pre-split rows, validating rectangularity.
    pub fn from_rows(rows: Vec<String>) -> Result<Self> {
        let width = match rows.first() {
            Some(first) => first.chars().count(),
            None => {
                return Err(TiletgaError::LevelFormat(
                    "level contains no rows".to_string(),
                ))
            }
        };
        if width == 0 {
            return Err(TiletgaError::LevelFormat("level rows are empty".to_string()));
        }
        for (index, row) in rows.iter().enumerate() {
            let row_width = row.chars().count();
            if row_width != width {
                return Err(TiletgaError::LevelFormat(format!(
                    "row {} has {} columns, expected {}",
                    index, row_width, width
                )));
            }
        }
        Ok(Self { rows, width })
    }

    /// Reads a grid from a line-oriented text stream. Trailing carriage
    /// returns are stripped so CRLF level files parse identically.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut rows = Vec::new();
        for line in reader.lines() {
            rows.push(line?.trim_end_matches('\r').to_string());
        }
        Self::from_rows(rows)
    }

    /// Convenience wrapper: opens `path` and reads the grid.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    /// Grid width in tiles.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in tiles.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// The raw rows, top line of the level file first.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }
}
