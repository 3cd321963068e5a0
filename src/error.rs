use thiserror::Error;

/// Everything that can go wrong while reading puzzle input.
///
/// Each variant is local to one call; nothing is retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// OCR block has the wrong number of rows or over-long rows.
    #[error("malformed account block: {0}")]
    MalformedBlock(String),

    /// A 3×3 slice matched none of the ten known glyphs.
    #[error("unrecognized glyph at digit {position}")]
    MalformedDigit { position: usize },

    /// A card token that is not a rank followed by a suit.
    #[error("invalid card: {0}")]
    InvalidCard(String),

    /// Wrong card count or repeated cards.
    #[error("invalid hand: {0}")]
    InvalidHand(String),

    /// Broken edges, dead-end corners, or a piece that is not a rectangle.
    #[error("malformed figure at ({row}, {col}): {reason}")]
    MalformedFigure {
        row: usize,
        col: usize,
        reason: &'static str,
    },

    /// Word search rows of unequal length.
    #[error("ragged grid: row {row} has {len} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// A range token that cannot be expanded.
    #[error("malformed range token: {0:?}")]
    MalformedRange(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_figure() {
        let error = Error::MalformedFigure {
            row: 2,
            col: 7,
            reason: "broken edge",
        };
        assert_eq!(error.to_string(), "malformed figure at (2, 7): broken edge");
    }

    #[test]
    fn display_digit() {
        let error = Error::MalformedDigit { position: 4 };
        assert_eq!(error.to_string(), "unrecognized glyph at digit 4");
    }
}
