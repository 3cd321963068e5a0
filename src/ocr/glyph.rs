use crate::GLYPH_HEIGHT;
use crate::GLYPH_WIDTH;

/// top / middle / bottom rows for digits 0 through 9
const GLYPHS: [[&str; GLYPH_HEIGHT]; 10] = [
    [" _ ", "| |", "|_|"],
    ["   ", "  |", "  |"],
    [" _ ", " _|", "|_ "],
    [" _ ", " _|", " _|"],
    ["   ", "|_|", "  |"],
    [" _ ", "|_ ", " _|"],
    [" _ ", "|_ ", "|_|"],
    [" _ ", "  |", "  |"],
    [" _ ", "|_|", "|_|"],
    [" _ ", "|_|", " _|"],
];

/// One 3×3 cell cut out of a scanned block.
///
/// A Glyph is just characters; it only means something
/// once it matches one of the ten known digit shapes.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Glyph([[char; GLYPH_WIDTH]; GLYPH_HEIGHT]);

impl Glyph {
    /// Cut the glyph at digit `position` out of three padded rows.
    pub fn scan(rows: &[Vec<char>; GLYPH_HEIGHT], position: usize) -> Self {
        let mut cells = [[' '; GLYPH_WIDTH]; GLYPH_HEIGHT];
        let offset = position * GLYPH_WIDTH;
        for (cell, row) in cells.iter_mut().zip(rows.iter()) {
            for (i, c) in cell.iter_mut().enumerate() {
                *c = row.get(offset + i).copied().unwrap_or(' ');
            }
        }
        Self(cells)
    }

    /// The digit this glyph draws, if it draws one exactly.
    pub fn digit(&self) -> Option<u8> {
        (0..10u8).find(|&d| Self::from(d) == *self)
    }

    /// One rendered row of the glyph.
    pub fn row(&self, i: usize) -> String {
        self.0[i].iter().collect()
    }
}

/// u8 injection
/// digits above 9 have no glyph
impl From<u8> for Glyph {
    fn from(digit: u8) -> Self {
        debug_assert!(digit < 10, "no glyph for {}", digit);
        let mut cells = [[' '; GLYPH_WIDTH]; GLYPH_HEIGHT];
        for (cell, row) in cells.iter_mut().zip(GLYPHS[digit as usize]) {
            for (c, ch) in cell.iter_mut().zip(row.chars()) {
                *c = ch;
            }
        }
        Self(cells)
    }
}

impl std::fmt::Display for Glyph {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let rows = (0..GLYPH_HEIGHT).map(|i| self.row(i)).collect::<Vec<_>>();
        write!(f, "{}", rows.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(top: &str, mid: &str, bot: &str) -> [Vec<char>; GLYPH_HEIGHT] {
        [
            top.chars().collect(),
            mid.chars().collect(),
            bot.chars().collect(),
        ]
    }

    #[test]
    fn injective_u8() {
        for digit in 0..10u8 {
            assert_eq!(Glyph::from(digit).digit(), Some(digit));
        }
    }

    #[test]
    fn scan_second_position() {
        let rows = rows("    _ ", "  | _|", "  ||_ ");
        assert_eq!(Glyph::scan(&rows, 0).digit(), Some(1));
        assert_eq!(Glyph::scan(&rows, 1).digit(), Some(2));
    }

    #[test]
    fn scan_short_rows_pad_blank() {
        let rows = rows("", "  |", "  |");
        assert_eq!(Glyph::scan(&rows, 0).digit(), Some(1));
    }

    #[test]
    fn unknown_shape() {
        let rows = rows(" _ ", "| |", "| |");
        assert_eq!(Glyph::scan(&rows, 0).digit(), None);
    }

    #[test]
    fn display_eight() {
        assert_eq!(Glyph::from(8).to_string(), " _ \n|_|\n|_|");
    }
}
