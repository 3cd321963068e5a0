//! Range notation for sorted integer sequences, e.g. `0-2,5,7-9`.
pub mod notation;
pub use notation::*;

pub mod run;
pub use run::*;

pub mod runs;
pub use runs::*;
