// In: src/convert.rs

//! The picture-format bridge: converts external pictures (PNG) into tile
//! images and externalizes composites back to PNG, via the `image` crate.
//!
//! This is collaborator glue, not codec logic: the only transformations are
//! the RGBA→BGRA channel reorder and the row flip between the PNG's
//! top-to-bottom raster and the tile format's default bottom-to-top order.
//! Converted tiles are always 32-bit with a bottom-left-origin descriptor;
//! the codec itself never flips anything (raster order is whatever the
//! header's descriptor flags say it is).

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};

use crate::error::TiletgaError;
use crate::tga::{header, Header, Pixel, TgaImage};
use crate::Result;

/// Converts a decoded RGBA raster into a 32-bit tile image with bottom-up
/// row order.
fn rgba_to_tile(raster: &RgbaImage) -> Result<TgaImage> {
    let (width, height) = raster.dimensions();
    if width > i16::MAX as u32 || height > i16::MAX as u32 {
        return Err(TiletgaError::OversizedPicture { width, height });
    }

    let mut pixels = Vec::with_capacity((width * height) as usize);
    for y in (0..height).rev() {
        for x in 0..width {
            let Rgba([red, green, blue, alpha]) = *raster.get_pixel(x, y);
            pixels.push(Pixel::rgba(blue, green, red, alpha));
        }
    }

    let head = Header {
        encoding_type: header::ENCODING_UNCOMPRESSED_TRUE_COLOR,
        width: width as i16,
        height: height as i16,
        bits_per_pixel: 32,
        image_descriptor: 0, // bottom-left origin
        ..Header::default()
    };
    Ok(TgaImage::from_parts(head, pixels))
}

/// Converts a tile image back into a top-to-bottom RGBA raster, honoring the
/// header's top-down descriptor bit when deciding whether to flip. 24-bit
/// pixels convert with opaque alpha.
fn tile_to_rgba(image: &TgaImage) -> RgbaImage {
    let width = image.width() as u32;
    let height = image.height() as u32;
    let opaque = image.header.bits_per_pixel != 32;

    RgbaImage::from_fn(width, height, |x, y| {
        let row = if image.header.is_top_down() {
            y as usize
        } else {
            (height - 1 - y) as usize
        };
        let pixel = image.row(row)[x as usize];
        let alpha = if opaque { 255 } else { pixel.alpha };
        Rgba([pixel.red, pixel.green, pixel.blue, alpha])
    })
}

/// Decodes a PNG byte slice into a 32-bit tile image.
pub fn png_bytes_to_tile(bytes: &[u8]) -> Result<TgaImage> {
    let raster = image::load_from_memory_with_format(bytes, ImageFormat::Png)?.to_rgba8();
    rgba_to_tile(&raster)
}

/// Opens a PNG file and converts it into a 32-bit tile image.
pub fn png_file_to_tile<P: AsRef<Path>>(path: P) -> Result<TgaImage> {
    let raster = image::open(path.as_ref())?.to_rgba8();
    rgba_to_tile(&raster)
}

/// Externalizes a tile image as PNG bytes.
pub fn tile_to_png_bytes(image: &TgaImage) -> Result<Vec<u8>> {
    let raster = tile_to_rgba(image);
    let mut buffer = Cursor::new(Vec::new());
    raster.write_to(&mut buffer, ImageFormat::Png)?;
    Ok(buffer.into_inner())
}

/// Externalizes a tile image as a PNG file at `path`.
pub fn tile_to_png_file<P: AsRef<Path>>(image: &TgaImage, path: P) -> Result<()> {
    let raster = tile_to_rgba(image);
    raster.save_with_format(path.as_ref(), ImageFormat::Png)?;
    Ok(())
}
