// In: src/tga/header.rs

//! Defines the on-disk header structure and constants for the tile format.
//! This is the single source of truth for the field set and their widths;
//! the byte-level layout contract is enforced by `codec::decode` and
//! `codec::encode`, which read and write these fields in declaration order.

/// Total size of the fixed-layout header, in bytes. Pixel data begins
/// immediately after.
pub const HEADER_LEN: usize = 18;

/// Encoding-type code for uncompressed true-color pixel data. The decoder
/// forces this code onto the header after materializing a run-length stream.
pub const ENCODING_UNCOMPRESSED_TRUE_COLOR: u8 = 2;

/// Encoding-type code for run-length-encoded true-color pixel data.
pub const ENCODING_RLE_TRUE_COLOR: u8 = 10;

/// Image-descriptor bit: when set, rows are stored top-to-bottom instead of
/// the format's default bottom-to-top order.
pub const DESCRIPTOR_TOP_DOWN: u8 = 0x20;

/// The fixed set of metadata fields describing image geometry and pixel
/// encoding. All multi-byte fields are little-endian on disk; declaration
/// order below is the on-disk field order.
///
/// Every field round-trips byte-for-byte through decode→encode except
/// `encoding_type`, which decode rewrites after decompressing a 32-bit
/// stream. The color-map fields are pass-through only; this codec never
/// populates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    pub id_length: u8,
    pub color_map_type: u8,
    pub encoding_type: u8,
    pub color_map_origin: i16,
    pub color_map_length: i16,
    pub color_map_depth: u8,
    pub x_origin: i16,
    pub y_origin: i16,
    pub width: i16,
    pub height: i16,
    pub bits_per_pixel: u8,
    pub image_descriptor: u8,
}

impl Header {
    /// Number of pixels the header declares, treating the signed geometry
    /// fields as a count. Negative geometry is out of scope and clamps to an
    /// empty image rather than wrapping into a huge allocation.
    pub fn pixel_count(&self) -> usize {
        let width = self.width.max(0) as usize;
        let height = self.height.max(0) as usize;
        width * height
    }

    /// Whether the descriptor flags declare top-to-bottom row order.
    pub fn is_top_down(&self) -> bool {
        self.image_descriptor & DESCRIPTOR_TOP_DOWN != 0
    }
}
