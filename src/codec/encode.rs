// In: src/codec/encode.rs

//! This module contains the pure, stateless kernel for serializing an image
//! back into the tile format.
//!
//! The encoder is a literal-only writer: it never emits run-length packets,
//! so an image decoded from a compressed source re-encodes larger but with
//! identical pixel content. Header fields are written in the same fixed
//! order and widths the decoder reads them.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use byteorder::{WriteBytesExt, LE};

use crate::tga::{Header, TgaImage};
use crate::Result;

/// Serializes `image` to a byte stream: the 18-byte header followed by
/// literal pixel data in buffer index order (encoded raster order).
/// 24-bit images emit blue/green/red; 32-bit images emit
/// blue/green/red/alpha. Fails only on the underlying writer.
pub fn encode<W: Write>(image: &TgaImage, writer: &mut W) -> Result<()> {
    write_header(&image.header, writer)?;

    match image.header.bits_per_pixel {
        24 => {
            for pixel in image.pixels() {
                writer.write_all(&[pixel.blue, pixel.green, pixel.red])?;
            }
        }
        32 => {
            for pixel in image.pixels() {
                writer.write_all(&[pixel.blue, pixel.green, pixel.red, pixel.alpha])?;
            }
        }
        // Unsupported depths never materialize a buffer, so there is nothing
        // beyond the header to write.
        _ => {}
    }

    log::debug!(
        "encoded {}x{} image, {} bpp",
        image.header.width,
        image.header.height,
        image.header.bits_per_pixel
    );
    Ok(())
}

/// Convenience wrapper: serializes into a fresh byte vector.
pub fn encode_bytes(image: &TgaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(
        crate::tga::header::HEADER_LEN
            + image.pixels().len() * usize::from(image.header.bits_per_pixel / 8),
    );
    encode(image, &mut bytes)?;
    Ok(bytes)
}

/// Convenience wrapper: creates `path` and writes one image, releasing the
/// file handle on every exit path.
pub fn encode_file<P: AsRef<Path>>(image: &TgaImage, path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    encode(image, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Writes the 12 header fields in on-disk order. Exactly 18 bytes.
fn write_header<W: Write>(header: &Header, writer: &mut W) -> Result<()> {
    writer.write_u8(header.id_length)?;
    writer.write_u8(header.color_map_type)?;
    writer.write_u8(header.encoding_type)?;
    writer.write_i16::<LE>(header.color_map_origin)?;
    writer.write_i16::<LE>(header.color_map_length)?;
    writer.write_u8(header.color_map_depth)?;
    writer.write_i16::<LE>(header.x_origin)?;
    writer.write_i16::<LE>(header.y_origin)?;
    writer.write_i16::<LE>(header.width)?;
    writer.write_i16::<LE>(header.height)?;
    writer.write_u8(header.bits_per_pixel)?;
    writer.write_u8(header.image_descriptor)?;
    Ok(())
}
