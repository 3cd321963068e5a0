//! Five-card poker hand classification.
//!
//! Cards are parsed from tokens like `"10♥"`, `"A♠"` or `"Ts"`; a [`Hand`]
//! is exactly five distinct cards stored as a bitset, and the [`Evaluator`]
//! maps it to one of nine [`Ranking`] categories.
pub mod card;
pub use card::*;

pub mod evaluator;
pub use evaluator::*;

pub mod hand;
pub use hand::*;

pub mod rank;
pub use rank::*;

pub mod ranking;
pub use ranking::*;

pub mod suit;
pub use suit::*;
