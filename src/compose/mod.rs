//! This module serves as the public API for the scanline compositor: the
//! four stitch operations that concatenate decoded images along rows or
//! columns at pixel granularity.
//!
//! Every operation is a pure function over borrowed inputs that returns a
//! fresh [`crate::tga::TgaImage`]; nothing is mutated in place, so multiple
//! composites may share the same source images without aliasing hazards.
//! All preconditions are validated before any output buffer is allocated.

//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod stitch;

//==================================================================================
// 2. Public API Re-exports
//==================================================================================
pub use stitch::{stitch_multi_right, stitch_multi_up, stitch_right, stitch_up};
