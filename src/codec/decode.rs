// In: src/codec/decode.rs

//! This module contains the pure, stateless kernel for decoding a tile-format
//! byte stream into a fully materialized image.
//!
//! The stream is a fixed 18-byte little-endian header followed by pixel data.
//! 24-bit pixel data is always literal (three bytes per pixel, blue/green/red).
//! 32-bit pixel data is packet-based run-length data: one control byte whose
//! high bit selects run vs. literal and whose low 7 bits + 1 give the count,
//! followed by one pixel (run) or `count` pixels (literal), four bytes each.
//! There is no magic number or version check in this format; any well-formed
//! byte count is accepted.

use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;

use byteorder::{ReadBytesExt, LE};

use crate::error::TiletgaError;
use crate::tga::{header, Header, Pixel, TgaImage};
use crate::Result;

/// Decodes one image from a byte stream.
///
/// Fails with [`TiletgaError::Io`] when the stream ends before the declared
/// pixel count is reached (a truncated run-length packet surfaces the same
/// way), with [`TiletgaError::PacketOverrun`] when a run-length packet would
/// carry the buffer past the declared pixel count, and with
/// [`TiletgaError::UnsupportedBitDepth`] when the header declares a depth
/// other than 24 or 32; in that case the header has been fully parsed and is
/// carried inside the error, but no pixel data was read.
pub fn decode<R: Read>(reader: &mut R) -> Result<TgaImage> {
    let mut head = read_header(reader)?;
    let num_pixels = head.pixel_count();

    let pixels = match head.bits_per_pixel {
        // 24 bits per pixel: literal blue/green/red triples, no compression
        // path exists for this depth in the pipeline.
        24 => read_literal_rgb(reader, num_pixels)?,

        // 32 bits per pixel: packet-based run-length decompression. Once the
        // buffer is materialized the stream is literal as far as any future
        // encode is concerned, so rewrite the encoding-type code.
        32 => {
            let pixels = decompress_rgba(reader, num_pixels)?;
            head.encoding_type = header::ENCODING_UNCOMPRESSED_TRUE_COLOR;
            pixels
        }

        bits => {
            return Err(TiletgaError::UnsupportedBitDepth {
                bits_per_pixel: bits,
                header: head,
            })
        }
    };

    log::debug!(
        "decoded {}x{} image, {} bpp, {} pixels",
        head.width,
        head.height,
        head.bits_per_pixel,
        pixels.len()
    );
    Ok(TgaImage::from_parts(head, pixels))
}

/// Convenience wrapper: decodes from an in-memory byte slice.
pub fn decode_bytes(bytes: &[u8]) -> Result<TgaImage> {
    decode(&mut Cursor::new(bytes))
}

/// Convenience wrapper: opens `path`, decodes one image, and releases the
/// file handle on every exit path.
pub fn decode_file<P: AsRef<Path>>(path: P) -> Result<TgaImage> {
    let file = File::open(path.as_ref())?;
    decode(&mut BufReader::new(file))
}

/// Reads the 12 header fields in on-disk order. Exactly 18 bytes.
fn read_header<R: Read>(reader: &mut R) -> Result<Header> {
    Ok(Header {
        id_length: reader.read_u8()?,
        color_map_type: reader.read_u8()?,
        encoding_type: reader.read_u8()?,
        color_map_origin: reader.read_i16::<LE>()?,
        color_map_length: reader.read_i16::<LE>()?,
        color_map_depth: reader.read_u8()?,
        x_origin: reader.read_i16::<LE>()?,
        y_origin: reader.read_i16::<LE>()?,
        width: reader.read_i16::<LE>()?,
        height: reader.read_i16::<LE>()?,
        bits_per_pixel: reader.read_u8()?,
        image_descriptor: reader.read_u8()?,
    })
}

/// Reads exactly `num_pixels` literal three-byte pixels.
fn read_literal_rgb<R: Read>(reader: &mut R, num_pixels: usize) -> Result<Vec<Pixel>> {
    let mut pixels = Vec::with_capacity(num_pixels);
    let mut channels = [0u8; 3];
    for _ in 0..num_pixels {
        reader.read_exact(&mut channels)?;
        pixels.push(Pixel::rgb(channels[0], channels[1], channels[2]));
    }
    Ok(pixels)
}

/// Reads one four-byte pixel in blue/green/red/alpha order.
fn read_pixel_rgba<R: Read>(reader: &mut R) -> Result<Pixel> {
    let mut channels = [0u8; 4];
    reader.read_exact(&mut channels)?;
    Ok(Pixel::rgba(channels[0], channels[1], channels[2], channels[3]))
}

/// The packet-based run-length state machine, implemented as an explicit
/// loop with an accumulated-pixel-count exit condition so stack use stays
/// bounded on large images. Two packet kinds per control byte:
/// high bit set = one pixel repeated `count` times, high bit clear =
/// `count` literal pixels. A packet whose count would push the buffer past
/// `num_pixels` is rejected as [`TiletgaError::PacketOverrun`]; packets
/// never cross the image boundary in well-formed streams.
fn decompress_rgba<R: Read>(reader: &mut R, num_pixels: usize) -> Result<Vec<Pixel>> {
    let mut pixels = Vec::with_capacity(num_pixels);

    while pixels.len() < num_pixels {
        let control = reader.read_u8()?;
        let count = usize::from(control & 0x7F) + 1;
        if pixels.len() + count > num_pixels {
            return Err(TiletgaError::PacketOverrun {
                declared: num_pixels,
                decoded: pixels.len(),
                count,
            });
        }

        if control & 0x80 != 0 {
            // Run-length packet: one pixel, appended `count` times.
            let pixel = read_pixel_rgba(reader)?;
            for _ in 0..count {
                pixels.push(pixel);
            }
        } else {
            // Literal packet: `count` pixels, appended as-is.
            for _ in 0..count {
                pixels.push(read_pixel_rgba(reader)?);
            }
        }
    }

    Ok(pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tga::header::{ENCODING_RLE_TRUE_COLOR, ENCODING_UNCOMPRESSED_TRUE_COLOR};

    /// Builds the 18 header bytes by hand, in on-disk field order.
    fn header_bytes(width: i16, height: i16, bits_per_pixel: u8, encoding_type: u8) -> Vec<u8> {
        let mut bytes = vec![
            0, // id_length
            0, // color_map_type
            encoding_type,
            0, 0, // color_map_origin
            0, 0, // color_map_length
            0, // color_map_depth
            0, 0, // x_origin
            0, 0, // y_origin
        ];
        bytes.extend_from_slice(&width.to_le_bytes());
        bytes.extend_from_slice(&height.to_le_bytes());
        bytes.push(bits_per_pixel);
        bytes.push(0); // image_descriptor
        bytes
    }

    #[test]
    fn header_fields_parse_in_order_and_width() {
        let mut bytes = header_bytes(640, -480, 24, ENCODING_UNCOMPRESSED_TRUE_COLOR);
        bytes[3] = 0x34; // color_map_origin low byte
        bytes[4] = 0x12;
        let head = read_header(&mut Cursor::new(&bytes)).unwrap();
        assert_eq!(head.width, 640);
        assert_eq!(head.height, -480);
        assert_eq!(head.color_map_origin, 0x1234);
        assert_eq!(head.bits_per_pixel, 24);
    }

    #[test]
    fn decodes_literal_24_bit_pixels_in_bgr_order() {
        let mut bytes = header_bytes(2, 1, 24, ENCODING_UNCOMPRESSED_TRUE_COLOR);
        bytes.extend_from_slice(&[10, 20, 30, 40, 50, 60]);
        let image = decode_bytes(&bytes).unwrap();
        assert_eq!(image.pixels(), &[Pixel::rgb(10, 20, 30), Pixel::rgb(40, 50, 60)]);
        // 24-bit input has no compression path; the encoding type passes through.
        assert_eq!(image.header.encoding_type, ENCODING_UNCOMPRESSED_TRUE_COLOR);
    }

    #[test]
    fn decodes_run_then_literal_packets() {
        // run(N=3, pixel=(10,20,30,255)) then literal(N=2, pixels=[(1,2,3,4),(5,6,7,8)])
        let mut bytes = header_bytes(5, 1, 32, ENCODING_RLE_TRUE_COLOR);
        bytes.extend_from_slice(&[0x80 | 2, 10, 20, 30, 255]);
        bytes.extend_from_slice(&[1, 1, 2, 3, 4, 5, 6, 7, 8]);
        let image = decode_bytes(&bytes).unwrap();
        assert_eq!(
            image.pixels(),
            &[
                Pixel::rgba(10, 20, 30, 255),
                Pixel::rgba(10, 20, 30, 255),
                Pixel::rgba(10, 20, 30, 255),
                Pixel::rgba(1, 2, 3, 4),
                Pixel::rgba(5, 6, 7, 8),
            ]
        );
    }

    #[test]
    fn forces_encoding_type_after_rle_decode() {
        let mut bytes = header_bytes(1, 1, 32, ENCODING_RLE_TRUE_COLOR);
        bytes.extend_from_slice(&[0x80, 9, 9, 9, 9]);
        let image = decode_bytes(&bytes).unwrap();
        assert_eq!(image.header.encoding_type, ENCODING_UNCOMPRESSED_TRUE_COLOR);
    }

    #[test]
    fn unsupported_depth_returns_parsed_header_and_no_pixels() {
        let bytes = header_bytes(4, 4, 8, ENCODING_UNCOMPRESSED_TRUE_COLOR);
        match decode_bytes(&bytes) {
            Err(TiletgaError::UnsupportedBitDepth {
                bits_per_pixel,
                header: head,
            }) => {
                assert_eq!(bits_per_pixel, 8);
                assert_eq!(head.bits_per_pixel, 8);
                assert_eq!(head.width, 4);
                assert_eq!(head.height, 4);
            }
            other => panic!("expected UnsupportedBitDepth, got {:?}", other),
        }
    }

    #[test]
    fn truncated_literal_stream_is_an_io_error() {
        let mut bytes = header_bytes(2, 2, 24, ENCODING_UNCOMPRESSED_TRUE_COLOR);
        bytes.extend_from_slice(&[1, 2, 3]); // one pixel of four declared
        match decode_bytes(&bytes) {
            Err(TiletgaError::Io(err)) => {
                assert_eq!(err.kind(), std::io::ErrorKind::UnexpectedEof);
            }
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn truncated_rle_packet_is_an_io_error() {
        let mut bytes = header_bytes(4, 1, 32, ENCODING_RLE_TRUE_COLOR);
        bytes.extend_from_slice(&[0x80 | 3, 10, 20]); // pixel cut short
        assert!(matches!(decode_bytes(&bytes), Err(TiletgaError::Io(_))));
    }

    #[test]
    fn run_packet_past_the_pixel_count_is_rejected() {
        // 2x1 image, but the run packet carries 3 pixels.
        let mut bytes = header_bytes(2, 1, 32, ENCODING_RLE_TRUE_COLOR);
        bytes.extend_from_slice(&[0x80 | 2, 10, 20, 30, 255]);
        match decode_bytes(&bytes) {
            Err(TiletgaError::PacketOverrun {
                declared,
                decoded,
                count,
            }) => {
                assert_eq!(declared, 2);
                assert_eq!(decoded, 0);
                assert_eq!(count, 3);
            }
            other => panic!("expected PacketOverrun, got {:?}", other),
        }
    }

    #[test]
    fn literal_packet_past_the_pixel_count_is_rejected() {
        let mut bytes = header_bytes(1, 1, 32, ENCODING_RLE_TRUE_COLOR);
        bytes.extend_from_slice(&[1, 1, 2, 3, 4, 5, 6, 7, 8]); // two literals, one declared
        assert!(matches!(
            decode_bytes(&bytes),
            Err(TiletgaError::PacketOverrun { declared: 1, .. })
        ));
    }

    #[test]
    fn zero_area_image_decodes_to_empty_buffer() {
        let bytes = header_bytes(0, 0, 24, ENCODING_UNCOMPRESSED_TRUE_COLOR);
        let image = decode_bytes(&bytes).unwrap();
        assert!(image.pixels().is_empty());
    }
}
