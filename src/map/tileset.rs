// In: src/map/tileset.rs

//! The code→asset table and the loaded tileset.
//!
//! `TilesetConfig` is the serde-deserializable table created once at the
//! application boundary (a JSON object mapping one-character tile codes to
//! asset base names) and passed down explicitly. `Tileset` is the in-memory
//! result of resolving that table against a directory of tile or PNG assets,
//! with every image decoded and ready for stitching.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::codec;
use crate::convert;
use crate::error::TiletgaError;
use crate::tga::TgaImage;
use crate::Result;

/// The code→asset-name table, e.g. `{".": "grass", "#": "wall"}`.
/// Keys must be exactly one character; names are asset base names without
/// an extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilesetConfig {
    codes: HashMap<char, String>,
}

impl TilesetConfig {
    /// Parses the table from a JSON object and validates the keys.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: HashMap<String, String> = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    /// Parses the table from a JSON stream (e.g. an open config file).
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: HashMap<String, String> = serde_json::from_reader(reader)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: HashMap<String, String>) -> Result<Self> {
        let mut codes = HashMap::with_capacity(raw.len());
        for (key, name) in raw {
            let mut chars = key.chars();
            let code = match (chars.next(), chars.next()) {
                (Some(code), None) => code,
                _ => {
                    return Err(TiletgaError::TilesetConfig(format!(
                        "tile code {:?} must be exactly one character",
                        key
                    )))
                }
            };
            codes.insert(code, name);
        }
        Ok(Self { codes })
    }

    /// The asset base name mapped to `code`, if any.
    pub fn asset_name(&self, code: char) -> Option<&str> {
        self.codes.get(&code).map(String::as_str)
    }

    /// Iterates the configured (code, asset-name) pairs in arbitrary order.
    pub fn entries(&self) -> impl Iterator<Item = (char, &str)> {
        self.codes.iter().map(|(&code, name)| (code, name.as_str()))
    }
}

// A serde-shaped mirror so the table can also live inside a larger config
// document: `{"tiles": {".": "grass"}}`.
#[derive(Debug, Deserialize)]
pub struct TilesetConfigFile {
    tiles: HashMap<String, String>,
}

impl TilesetConfigFile {
    pub fn into_config(self) -> Result<TilesetConfig> {
        TilesetConfig::from_raw(self.tiles)
    }
}

/// Every configured tile code resolved to a decoded image.
#[derive(Debug, Clone)]
pub struct Tileset {
    tiles: HashMap<char, TgaImage>,
}

impl Tileset {
    /// Builds a tileset from already-decoded images (used by tests and by
    /// callers that originate tiles some other way).
    pub fn from_images(tiles: HashMap<char, TgaImage>) -> Self {
        Self { tiles }
    }

    /// Resolves each configured asset as `<dir>/<name>.tga` and decodes it.
    pub fn load_tga_dir<P: AsRef<Path>>(config: &TilesetConfig, dir: P) -> Result<Self> {
        let mut tiles = HashMap::with_capacity(config.codes.len());
        for (code, name) in config.entries() {
            let path = dir.as_ref().join(format!("{}.tga", name));
            log::debug!("loading tile {:?} from {}", code, path.display());
            tiles.insert(code, codec::decode_file(&path)?);
        }
        Ok(Self { tiles })
    }

    /// Resolves each configured asset as `<dir>/<name>.png` and converts it
    /// into the tile format through the PNG bridge.
    pub fn load_png_dir<P: AsRef<Path>>(config: &TilesetConfig, dir: P) -> Result<Self> {
        let mut tiles = HashMap::with_capacity(config.codes.len());
        for (code, name) in config.entries() {
            let path = dir.as_ref().join(format!("{}.png", name));
            log::debug!("converting tile {:?} from {}", code, path.display());
            tiles.insert(code, convert::png_file_to_tile(&path)?);
        }
        Ok(Self { tiles })
    }

    /// The decoded image for `code`, if configured.
    pub fn tile(&self, code: char) -> Option<&TgaImage> {
        self.tiles.get(&code)
    }
}
