//! Self-contained puzzle solvers.
//!
//! Every module here is an independent, pure transformation from inputs to
//! outputs. Nothing is shared between them beyond the crate [`Error`] and the
//! [`Arbitrary`] trait used for random test instances.
//!
//! - [`ocr`] — bank account numbers drawn as 3×3 ASCII glyphs
//! - [`poker`] — five-card hand classification
//! - [`rectangles`] — lazy decomposition of ASCII figures into rectangles
//! - [`search`] — snaking word search over a character grid
//! - [`permute`] — lazy permutations by iterative insertion
//! - [`ranges`] — range extraction and expansion for sorted integers
pub mod error;
pub mod ocr;
pub mod permute;
pub mod poker;
pub mod ranges;
pub mod rectangles;
pub mod search;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::*;

// ============================================================================
// SHAPE CONSTANTS
// ============================================================================
/// Digits in one scanned account number.
pub const ACCOUNT_DIGITS: usize = 9;
/// Columns occupied by one OCR glyph.
pub const GLYPH_WIDTH: usize = 3;
/// Rows occupied by one OCR glyph.
pub const GLYPH_HEIGHT: usize = 3;
/// Cards in a ranked poker hand.
pub const HAND_SIZE: usize = 5;
/// Shortest run of consecutive integers written as `start-end`.
pub const RUN_MINIMUM: usize = 3;
/// Most integers one range notation string may expand to.
pub const EXPANSION_LIMIT: usize = 1 << 20;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging. Debug when verbose, Info otherwise.
#[cfg(feature = "cli")]
pub fn log(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .unwrap_or_else(|_| log::warn!("logger already initialized"));
}
