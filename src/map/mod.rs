//! This module is the level-map composition driver layered on top of the
//! codec and compositor: a rectangular grid of single-character tile codes,
//! a code→asset table, and the build routine that stitches one decoded tile
//! per grid cell into a single composite image.
//!
//! All collaborator state (the tile table, the grid) is passed in as explicit
//! values constructed at the application boundary; nothing here is ambient.

//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod builder;
pub mod level;
pub mod tileset;

//==================================================================================
// 2. Public API Re-exports
//==================================================================================
pub use builder::build_map;
pub use level::LevelGrid;
pub use tileset::{Tileset, TilesetConfig};
