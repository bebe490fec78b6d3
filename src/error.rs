// In: src/error.rs

//! This module defines the single, unified error type for the entire tiletga library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.

use thiserror::Error;

use crate::tga::Header;

#[derive(Error, Debug)]
pub enum TiletgaError {
    // =========================================================================
    // === High-Level, Semantic Errors (Specific to our library's logic)
    // =========================================================================
    /// The stream declared a pixel depth this codec does not materialize.
    /// Carries the fully parsed header so callers can still inspect the
    /// geometry of the rejected image; no pixel data was read.
    #[error("Unsupported pixel depth: {bits_per_pixel} bits per pixel (expected 24 or 32)")]
    UnsupportedBitDepth { bits_per_pixel: u8, header: Header },

    /// A run-length packet declared more pixels than the header's remaining
    /// pixel count. Packets never cross the image boundary in well-formed
    /// streams, so this is always malformed input.
    #[error(
        "Run-length packet overruns the image: {decoded} of {declared} pixels decoded, next packet carries {count}"
    )]
    PacketOverrun {
        declared: usize,
        decoded: usize,
        count: usize,
    },

    /// A stitch precondition failed. Names the operation, the dimension that
    /// disagreed and which operand carried it (operands are numbered from 1;
    /// the base image is operand 0).
    #[error(
        "{operation} failed: {dimension} mismatch (base image: {expected}, operand #{operand}: {actual})"
    )]
    DimensionMismatch {
        operation: &'static str,
        dimension: &'static str,
        expected: i16,
        actual: i16,
        operand: usize,
    },

    /// A pairwise stitch was invoked with both operands aliasing the same image.
    #[error("{operation} failed: cannot stitch an image with itself")]
    SelfStitch { operation: &'static str },

    /// A multi-way stitch was invoked with nothing to stitch.
    #[error("{operation} failed: empty operand list")]
    EmptyOperandList { operation: &'static str },

    /// A stitch result's geometry does not fit the tile format's signed
    /// 16-bit width/height fields.
    #[error("{operation} failed: result {dimension} {value} exceeds the tile format limit of {max}", max = i16::MAX)]
    OversizedComposite {
        operation: &'static str,
        dimension: &'static str,
        value: i64,
    },

    /// The level grid text is malformed (ragged rows, empty file).
    #[error("Level format error: {0}")]
    LevelFormat(String),

    /// The tileset table is malformed (e.g. a multi-character tile code).
    #[error("Tileset config error: {0}")]
    TilesetConfig(String),

    /// A source picture's geometry does not fit the tile format's signed
    /// 16-bit width/height fields.
    #[error("Picture too large for the tile format: {width}x{height}")]
    OversizedPicture { width: u32, height: u32 },

    /// A grid cell uses a code the tileset table does not define.
    #[error("Unknown tile code {code:?} at row {row}, column {column}")]
    UnknownTileCode {
        code: char,
        row: usize,
        column: usize,
    },

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error originating from the underlying I/O subsystem. Truncated
    /// streams surface here as `UnexpectedEof` rather than as short buffers.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error from the Serde JSON library while reading a tileset table.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// An error from the `image` crate in the PNG bridge.
    #[error("Image library error: {0}")]
    ImageLib(#[from] image::ImageError),
}
