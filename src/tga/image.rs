// In: src/tga/image.rs

//! The in-memory image aggregate: a [`Header`] plus its fully materialized
//! pixel buffer. The buffer is row-major in encoded order (index 0 is the
//! first pixel of the first encoded row); the codec performs no vertical
//! flip, so whether that row is the visual top or bottom is governed by the
//! header's descriptor flags and is a concern for collaborators like the
//! PNG bridge.

use super::{Header, Pixel};

/// A decoded tile image. Invariant: `pixels.len() == header.pixel_count()`
/// whenever the buffer is materialized (an image rejected for unsupported
/// depth simply never becomes a `TgaImage`).
///
/// The pixel buffer is private so the invariant survives compositor
/// operations; all transforms produce a fresh `TgaImage` via
/// [`TgaImage::from_parts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TgaImage {
    pub header: Header,
    pixels: Vec<Pixel>,
}

impl TgaImage {
    /// Assembles an image from a header and a matching pixel buffer.
    ///
    /// # Panics
    /// Panics if the buffer length disagrees with the header geometry; both
    /// the decoder and the stitch operations construct the two together, so
    /// a mismatch is a bug in the caller.
    pub fn from_parts(header: Header, pixels: Vec<Pixel>) -> Self {
        assert_eq!(
            pixels.len(),
            header.pixel_count(),
            "pixel buffer length must equal width * height"
        );
        Self { header, pixels }
    }

    /// Image width in pixels (non-negative view of the header field).
    pub fn width(&self) -> usize {
        self.header.width.max(0) as usize
    }

    /// Image height in pixels (non-negative view of the header field).
    pub fn height(&self) -> usize {
        self.header.height.max(0) as usize
    }

    /// The full pixel buffer in encoded raster order.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// One scanline: `width` contiguous pixels starting at `row * width`.
    pub fn row(&self, row: usize) -> &[Pixel] {
        let width = self.width();
        &self.pixels[row * width..(row + 1) * width]
    }

    /// Iterates scanlines in encoded order. Yields nothing for a zero-area
    /// image (the `max(1)` chunk size only guards the empty-buffer case).
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> {
        self.pixels.chunks(self.width().max(1))
    }
}
