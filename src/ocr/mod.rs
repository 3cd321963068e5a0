//! Bank account numbers scanned as ASCII glyphs.
//!
//! A scanned entry is three rows of 27 characters. Every digit occupies a
//! 3×3 cell drawn with pipes and underscores:
//!
//! ```text
//!     _  _     _  _  _  _  _
//!   | _| _||_||_ |_   ||_||_|
//!   ||_  _|  | _||_|  ||_| _|
//! ```
pub mod account;
pub use account::*;

pub mod glyph;
pub use glyph::*;
