//! All orderings of a set of symbols, produced lazily.
pub mod permutations;
pub use permutations::*;
