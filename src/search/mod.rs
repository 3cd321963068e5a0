//! Snaking word search.
//!
//! A word is present when its letters can be traced through horizontally
//! or vertically adjacent cells without visiting any cell twice.
pub mod grid;
pub use grid::*;

pub mod step;
pub use step::*;
