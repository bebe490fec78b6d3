//! This module serves as the public API for the tile-format codec: the pair
//! of pure, stateless byte-stream transforms that turn raw tile-format bytes
//! into a [`crate::tga::TgaImage`] and back.
//!
//! The two halves are deliberately asymmetric. `decode` accepts both literal
//! and run-length-encoded 32-bit pixel data; `encode` is a literal-only
//! writer, so round-tripping a compressed source yields a larger but
//! byte-identical-in-content stream. Each call owns exactly one stream
//! handle for its duration and holds no state across calls.

//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod decode;
pub mod encode;

//==================================================================================
// 2. Public API Re-exports
//==================================================================================
pub use decode::{decode, decode_bytes, decode_file};
pub use encode::{encode, encode_bytes, encode_file};
