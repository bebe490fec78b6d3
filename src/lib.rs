//! This file is the root of the `tiletga` Rust crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of our library (`tga`, `codec`,
//!     `compose`, `map`, `convert`) so the Rust compiler knows they exist.
//! 2.  Re-exporting the handful of types that make up the public surface:
//!     the image model, the codec entry points, the stitch operations and
//!     the unified error type.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod codec;
pub mod compose;
pub mod convert;
pub mod map;
pub mod tga;

mod error;

//==================================================================================
// 2. Public API Re-exports
//==================================================================================
pub use error::TiletgaError;
pub use tga::{Header, Pixel, TgaImage};

/// The crate-wide result alias. Every fallible operation in the library
/// reports through the unified [`TiletgaError`].
pub type Result<T> = std::result::Result<T, TiletgaError>;
