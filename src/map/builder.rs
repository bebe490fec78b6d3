// In: src/map/builder.rs

//! Translates a level grid into one composite image: each grid row becomes a
//! horizontal strip via the multi-way right stitch, and the finished strips
//! are stacked with the multi-way up stitch.
//!
//! Strips are fed to `stitch_multi_up` in level-file order (top text line
//! first). That operation stacks its operands last-to-first with band 0 at
//! the encoded end, which for bottom-to-top rasters renders the first level
//! line at the top of the map.

use crate::compose::{stitch_multi_right, stitch_multi_up};
use crate::error::TiletgaError;
use crate::tga::TgaImage;
use crate::Result;

use super::level::LevelGrid;
use super::tileset::Tileset;

/// Stitches one tile per grid cell into a single composite image.
///
/// Fails with [`TiletgaError::UnknownTileCode`] on the first cell whose code
/// the tileset does not define, and propagates [`TiletgaError::DimensionMismatch`]
/// when tiles of uneven geometry meet in a strip.
pub fn build_map(grid: &LevelGrid, tiles: &Tileset) -> Result<TgaImage> {
    let mut strips = Vec::with_capacity(grid.height());

    for (row_index, row) in grid.rows().iter().enumerate() {
        strips.push(build_strip(row, row_index, tiles)?);
        log::info!("row {} built", row_index);
    }

    let composite = stitch_multi_up(&strips)?;
    log::info!(
        "map assembled: {}x{} pixels",
        composite.header.width,
        composite.header.height
    );
    Ok(composite)
}

/// Assembles one horizontal strip from a single grid row.
fn build_strip(row: &str, row_index: usize, tiles: &Tileset) -> Result<TgaImage> {
    let mut cells = row.chars().enumerate();

    // The grid is validated rectangular and non-empty before it gets here.
    let (first_column, first_code) = cells
        .next()
        .expect("LevelGrid rows are never empty");
    let first = lookup(tiles, first_code, row_index, first_column)?;

    let mut rest = Vec::with_capacity(row.len().saturating_sub(1));
    for (column, code) in cells {
        rest.push(lookup(tiles, code, row_index, column)?.clone());
    }

    if rest.is_empty() {
        return Ok(first.clone());
    }
    stitch_multi_right(first, &rest)
}

fn lookup<'a>(
    tiles: &'a Tileset,
    code: char,
    row: usize,
    column: usize,
) -> Result<&'a TgaImage> {
    tiles
        .tile(code)
        .ok_or(TiletgaError::UnknownTileCode { code, row, column })
}
