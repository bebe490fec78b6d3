// In: src/compose/stitch.rs

//! This module contains the pure, stateless kernels for stitching decoded
//! images into a larger raster.
//!
//! The horizontal operations interleave at scanline granularity: the raster
//! is row-major, so two images of equal height placed side by side must merge
//! row-by-row to remain a single valid raster. The vertical operations append
//! whole buffers, since stacked images that already share full width keep
//! row-major order as contiguous bands.
//!
//! Every operation validates its preconditions, including that the result
//! geometry still fits the header's signed 16-bit fields, before allocating
//! the output buffer.

use crate::error::TiletgaError;
use crate::tga::{Pixel, TgaImage};
use crate::Result;

/// Narrows a summed or multiplied dimension back to the header's signed
/// 16-bit field, rejecting results the tile format cannot represent.
fn checked_dimension(operation: &'static str, dimension: &'static str, value: i64) -> Result<i16> {
    i16::try_from(value).map_err(|_| TiletgaError::OversizedComposite {
        operation,
        dimension,
        value,
    })
}

/// Stitches `right` onto the right edge of `left`.
///
/// Preconditions: the operands are distinct images of equal height. The
/// output buffer is the scanline interleave `left_row0, right_row0,
/// left_row1, right_row1, ...`, not `left ++ right`. Result width is the sum
/// of the operand widths; height and all other header fields come from
/// `left`.
pub fn stitch_right(left: &TgaImage, right: &TgaImage) -> Result<TgaImage> {
    if std::ptr::eq(left, right) {
        return Err(TiletgaError::SelfStitch {
            operation: "stitch_right",
        });
    }
    if left.header.height != right.header.height {
        return Err(TiletgaError::DimensionMismatch {
            operation: "stitch_right",
            dimension: "height",
            expected: left.header.height,
            actual: right.header.height,
            operand: 1,
        });
    }

    let width = checked_dimension(
        "stitch_right",
        "width",
        i64::from(left.header.width) + i64::from(right.header.width),
    )?;

    let mut pixels: Vec<Pixel> = Vec::with_capacity(left.pixels().len() + right.pixels().len());
    for row_index in 0..left.height() {
        pixels.extend_from_slice(left.row(row_index));
        pixels.extend_from_slice(right.row(row_index));
    }

    let mut header = left.header;
    header.width = width;
    Ok(TgaImage::from_parts(header, pixels))
}

/// Stitches every image in `rest` onto the right edge of `first`, in input
/// order, in a single pass.
///
/// Preconditions: `rest` is non-empty and every operand shares both the
/// height and the width of `first` (a mismatch names the offending operand,
/// numbered from 1). Row `r` of the output is `first`'s row `r` followed by
/// each operand's row `r`. Result width is `first`'s width times the total
/// image count.
pub fn stitch_multi_right(first: &TgaImage, rest: &[TgaImage]) -> Result<TgaImage> {
    if rest.is_empty() {
        return Err(TiletgaError::EmptyOperandList {
            operation: "stitch_multi_right",
        });
    }
    for (index, other) in rest.iter().enumerate() {
        if first.header.height != other.header.height {
            return Err(TiletgaError::DimensionMismatch {
                operation: "stitch_multi_right",
                dimension: "height",
                expected: first.header.height,
                actual: other.header.height,
                operand: index + 1,
            });
        }
        if first.header.width != other.header.width {
            return Err(TiletgaError::DimensionMismatch {
                operation: "stitch_multi_right",
                dimension: "width",
                expected: first.header.width,
                actual: other.header.width,
                operand: index + 1,
            });
        }
    }

    let total_images = rest.len() + 1;
    let width = checked_dimension(
        "stitch_multi_right",
        "width",
        i64::from(first.header.width) * total_images as i64,
    )?;

    let mut pixels: Vec<Pixel> = Vec::with_capacity(first.pixels().len() * total_images);
    for row_index in 0..first.height() {
        pixels.extend_from_slice(first.row(row_index));
        for other in rest {
            pixels.extend_from_slice(other.row(row_index));
        }
    }

    let mut header = first.header;
    header.width = width;
    Ok(TgaImage::from_parts(header, pixels))
}

/// Stacks `incoming` on top of `base`.
///
/// Precondition: equal widths. The output buffer is all of `incoming`'s
/// pixels followed by all of `base`'s: the incoming operand becomes the
/// first encoded band. Result height is the sum of the operand heights;
/// width and all other header fields come from `base`.
pub fn stitch_up(base: &TgaImage, incoming: &TgaImage) -> Result<TgaImage> {
    if base.header.width != incoming.header.width {
        return Err(TiletgaError::DimensionMismatch {
            operation: "stitch_up",
            dimension: "width",
            expected: base.header.width,
            actual: incoming.header.width,
            operand: 1,
        });
    }

    let height = checked_dimension(
        "stitch_up",
        "height",
        i64::from(base.header.height) + i64::from(incoming.header.height),
    )?;

    let mut pixels: Vec<Pixel> = Vec::with_capacity(base.pixels().len() + incoming.pixels().len());
    pixels.extend_from_slice(incoming.pixels());
    pixels.extend_from_slice(base.pixels());

    let mut header = base.header;
    header.height = height;
    Ok(TgaImage::from_parts(header, pixels))
}

/// Stacks every image in `bands` into one column. `bands[0]` is the
/// reference operand; every element must share its width and height.
///
/// The output appends the buffers of `bands[n-1], bands[n-2], ..., bands[1]`
/// and finally `bands[0]`: band 0 is always the last encoded band. With
/// bottom-to-top rasters this stacking order is what places band 0 at the
/// rendered bottom, so callers feed bands in visual bottom-to-top order.
/// Result height is the band height times the band count.
pub fn stitch_multi_up(bands: &[TgaImage]) -> Result<TgaImage> {
    let first = match bands.first() {
        Some(first) => first,
        None => {
            return Err(TiletgaError::EmptyOperandList {
                operation: "stitch_multi_up",
            })
        }
    };
    for (index, band) in bands.iter().enumerate().skip(1) {
        if first.header.height != band.header.height {
            return Err(TiletgaError::DimensionMismatch {
                operation: "stitch_multi_up",
                dimension: "height",
                expected: first.header.height,
                actual: band.header.height,
                operand: index,
            });
        }
        if first.header.width != band.header.width {
            return Err(TiletgaError::DimensionMismatch {
                operation: "stitch_multi_up",
                dimension: "width",
                expected: first.header.width,
                actual: band.header.width,
                operand: index,
            });
        }
    }

    let height = checked_dimension(
        "stitch_multi_up",
        "height",
        i64::from(first.header.height) * bands.len() as i64,
    )?;

    let mut pixels: Vec<Pixel> = Vec::with_capacity(first.pixels().len() * bands.len());
    for (index, band) in bands.iter().enumerate().skip(1).rev() {
        pixels.extend_from_slice(band.pixels());
        log::debug!("band {} stitched", index);
    }
    pixels.extend_from_slice(first.pixels());
    log::debug!("band 0 stitched");

    let mut header = first.header;
    header.height = height;
    Ok(TgaImage::from_parts(header, pixels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tga::Header;

    fn px(value: u8) -> Pixel {
        Pixel::rgba(value, value, value, 255)
    }

    fn image(width: i16, height: i16, values: &[u8]) -> TgaImage {
        let header = Header {
            encoding_type: 2,
            width,
            height,
            bits_per_pixel: 32,
            ..Header::default()
        };
        TgaImage::from_parts(header, values.iter().copied().map(px).collect())
    }

    #[test]
    fn stitch_right_interleaves_scanlines() {
        let a = image(2, 2, &[0, 1, 2, 3]);
        let b = image(2, 2, &[10, 11, 12, 13]);
        let out = stitch_right(&a, &b).unwrap();
        assert_eq!(out.header.width, 4);
        assert_eq!(out.header.height, 2);
        let expected: Vec<Pixel> = [0, 1, 10, 11, 2, 3, 12, 13].iter().copied().map(px).collect();
        assert_eq!(out.pixels(), expected.as_slice());
    }

    #[test]
    fn stitch_right_accepts_unequal_widths() {
        let a = image(1, 2, &[0, 1]);
        let b = image(2, 2, &[10, 11, 12, 13]);
        let out = stitch_right(&a, &b).unwrap();
        assert_eq!(out.header.width, 3);
        let expected: Vec<Pixel> = [0, 10, 11, 1, 12, 13].iter().copied().map(px).collect();
        assert_eq!(out.pixels(), expected.as_slice());
    }

    #[test]
    fn stitch_right_rejects_height_mismatch_and_leaves_inputs_intact() {
        let a = image(2, 2, &[0, 1, 2, 3]);
        let b = image(2, 1, &[10, 11]);
        let a_before = a.clone();
        match stitch_right(&a, &b) {
            Err(TiletgaError::DimensionMismatch {
                operation,
                dimension,
                expected,
                actual,
                operand,
            }) => {
                assert_eq!(operation, "stitch_right");
                assert_eq!(dimension, "height");
                assert_eq!(expected, 2);
                assert_eq!(actual, 1);
                assert_eq!(operand, 1);
            }
            other => panic!("expected DimensionMismatch, got {:?}", other),
        }
        assert_eq!(a, a_before);
    }

    #[test]
    fn stitch_right_rejects_width_overflowing_the_header_field() {
        let a = image(20_000, 1, &vec![7; 20_000]);
        let b = image(20_000, 1, &vec![8; 20_000]);
        match stitch_right(&a, &b) {
            Err(TiletgaError::OversizedComposite {
                operation,
                dimension,
                value,
            }) => {
                assert_eq!(operation, "stitch_right");
                assert_eq!(dimension, "width");
                assert_eq!(value, 40_000);
            }
            other => panic!("expected OversizedComposite, got {:?}", other),
        }
    }

    #[test]
    fn stitch_right_rejects_self_stitch() {
        let a = image(2, 2, &[0, 1, 2, 3]);
        let a_before = a.clone();
        assert!(matches!(
            stitch_right(&a, &a),
            Err(TiletgaError::SelfStitch { operation: "stitch_right" })
        ));
        assert_eq!(a, a_before);
    }

    #[test]
    fn stitch_up_places_incoming_band_first() {
        let a = image(2, 1, &[0, 1]);
        let b = image(2, 1, &[10, 11]);
        let out = stitch_up(&a, &b).unwrap();
        assert_eq!(out.header.height, 2);
        assert_eq!(out.header.width, 2);
        let expected: Vec<Pixel> = [10, 11, 0, 1].iter().copied().map(px).collect();
        assert_eq!(out.pixels(), expected.as_slice());
    }

    #[test]
    fn stitch_up_rejects_height_overflowing_the_header_field() {
        let a = image(1, 20_000, &vec![7; 20_000]);
        let b = image(1, 20_000, &vec![8; 20_000]);
        match stitch_up(&a, &b) {
            Err(TiletgaError::OversizedComposite {
                operation,
                dimension,
                value,
            }) => {
                assert_eq!(operation, "stitch_up");
                assert_eq!(dimension, "height");
                assert_eq!(value, 40_000);
            }
            other => panic!("expected OversizedComposite, got {:?}", other),
        }
    }

    #[test]
    fn stitch_up_rejects_width_mismatch() {
        let a = image(2, 1, &[0, 1]);
        let b = image(3, 1, &[10, 11, 12]);
        assert!(matches!(
            stitch_up(&a, &b),
            Err(TiletgaError::DimensionMismatch {
                dimension: "width",
                expected: 2,
                actual: 3,
                ..
            })
        ));
    }

    #[test]
    fn stitch_multi_right_interleaves_all_operands_per_row() {
        let a = image(1, 2, &[0, 1]);
        let rest = vec![image(1, 2, &[10, 11]), image(1, 2, &[20, 21])];
        let out = stitch_multi_right(&a, &rest).unwrap();
        assert_eq!(out.header.width, 3);
        assert_eq!(out.header.height, 2);
        let expected: Vec<Pixel> = [0, 10, 20, 1, 11, 21].iter().copied().map(px).collect();
        assert_eq!(out.pixels(), expected.as_slice());
    }

    #[test]
    fn stitch_multi_right_names_the_offending_operand() {
        let a = image(1, 2, &[0, 1]);
        let rest = vec![image(1, 2, &[10, 11]), image(2, 2, &[20, 21, 22, 23])];
        match stitch_multi_right(&a, &rest) {
            Err(TiletgaError::DimensionMismatch {
                dimension, operand, ..
            }) => {
                assert_eq!(dimension, "width");
                assert_eq!(operand, 2);
            }
            other => panic!("expected DimensionMismatch, got {:?}", other),
        }
    }

    #[test]
    fn stitch_multi_right_rejects_width_overflowing_the_header_field() {
        let a = image(20_000, 1, &vec![7; 20_000]);
        let rest = vec![image(20_000, 1, &vec![8; 20_000])];
        assert!(matches!(
            stitch_multi_right(&a, &rest),
            Err(TiletgaError::OversizedComposite {
                operation: "stitch_multi_right",
                dimension: "width",
                value: 40_000,
            })
        ));
    }

    #[test]
    fn stitch_multi_right_rejects_empty_operand_list() {
        let a = image(1, 1, &[0]);
        assert!(matches!(
            stitch_multi_right(&a, &[]),
            Err(TiletgaError::EmptyOperandList { .. })
        ));
    }

    #[test]
    fn stitch_multi_up_stacks_bands_in_reverse_with_band_zero_last() {
        let bands = vec![
            image(1, 1, &[0]),
            image(1, 1, &[10]),
            image(1, 1, &[20]),
        ];
        let out = stitch_multi_up(&bands).unwrap();
        assert_eq!(out.header.height, 3);
        let expected: Vec<Pixel> = [20, 10, 0].iter().copied().map(px).collect();
        assert_eq!(out.pixels(), expected.as_slice());
    }

    #[test]
    fn stitch_multi_up_of_a_single_band_is_identity() {
        let bands = vec![image(2, 1, &[5, 6])];
        let out = stitch_multi_up(&bands).unwrap();
        assert_eq!(out, bands[0]);
    }

    #[test]
    fn stitch_multi_up_rejects_height_overflowing_the_header_field() {
        let bands = vec![
            image(1, 20_000, &vec![7; 20_000]),
            image(1, 20_000, &vec![8; 20_000]),
        ];
        assert!(matches!(
            stitch_multi_up(&bands),
            Err(TiletgaError::OversizedComposite {
                operation: "stitch_multi_up",
                dimension: "height",
                value: 40_000,
            })
        ));
    }

    #[test]
    fn stitch_multi_up_rejects_empty_band_list() {
        assert!(matches!(
            stitch_multi_up(&[]),
            Err(TiletgaError::EmptyOperandList { .. })
        ));
    }
}
