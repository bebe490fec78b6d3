// In: src/tga/pixel.rs

//! The four-channel pixel value. Channel order mirrors the on-disk order of
//! the tile format: blue, green, red, then alpha. The alpha slot is only
//! meaningful for 32-bit images; the codec never reads or writes it for
//! 24-bit pixel data.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    pub blue: u8,
    pub green: u8,
    pub red: u8,
    pub alpha: u8,
}

impl Pixel {
    /// Three-channel pixel for 24-bit images. The alpha slot is zeroed and
    /// must be treated as absent.
    pub fn rgb(blue: u8, green: u8, red: u8) -> Self {
        Self {
            blue,
            green,
            red,
            alpha: 0,
        }
    }

    /// Four-channel pixel for 32-bit images.
    pub fn rgba(blue: u8, green: u8, red: u8, alpha: u8) -> Self {
        Self {
            blue,
            green,
            red,
            alpha,
        }
    }
}
