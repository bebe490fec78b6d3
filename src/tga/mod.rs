//! This module defines the core, strongly-typed data representations for the
//! tile format: the fixed-layout [`Header`], the four-channel [`Pixel`], and
//! the [`TgaImage`] aggregate the codec and compositor operate on.
//!
//! Everything here is pure data. Byte-level serialization lives in `codec`,
//! pixel-buffer transforms live in `compose`.

pub mod header;
pub mod image;
pub mod pixel;

// Re-export the main types for easier access.
pub use header::Header;
pub use image::TgaImage;
pub use pixel::Pixel;
