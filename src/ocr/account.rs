use super::glyph::Glyph;
use crate::ACCOUNT_DIGITS;
use crate::Arbitrary;
use crate::Error;
use crate::GLYPH_HEIGHT;
use crate::GLYPH_WIDTH;

/// A nine digit account number recovered from a scanned block.
///
/// Parsing is strict: every 3×3 cell must match a known digit glyph,
/// otherwise the whole block is rejected with [`Error::MalformedDigit`]
/// naming the first offending position. Rendering with [`Account::glyphs`]
/// produces a block that parses back to the same number.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Account([u8; ACCOUNT_DIGITS]);

impl Account {
    /// Build from a plain decimal string such as `"490067715"`.
    pub fn try_from_digits(s: &str) -> Result<Self, Error> {
        let s = s.trim();
        let mut digits = [0u8; ACCOUNT_DIGITS];
        if s.chars().count() != ACCOUNT_DIGITS {
            return Err(Error::MalformedBlock(format!(
                "expected {} digits, found {:?}",
                ACCOUNT_DIGITS, s
            )));
        }
        for (digit, c) in digits.iter_mut().zip(s.chars()) {
            *digit = c
                .to_digit(10)
                .map(|d| d as u8)
                .ok_or_else(|| Error::MalformedBlock(format!("not a digit: {:?}", c)))?;
        }
        Ok(Self(digits))
    }

    /// The account number as a digit string.
    pub fn digits(&self) -> String {
        self.0.iter().map(|d| char::from(b'0' + d)).collect()
    }

    /// Checksum: (1·d1 + 2·d2 + … + 9·d9) mod 11 == 0, d1 rightmost.
    pub fn is_valid(&self) -> bool {
        self.0
            .iter()
            .rev()
            .zip(1..)
            .map(|(&d, weight)| d as usize * weight)
            .sum::<usize>()
            % 11
            == 0
    }

    /// Render back to the three row scanned form.
    pub fn glyphs(&self) -> String {
        let glyphs = self.0.map(Glyph::from);
        (0..GLYPH_HEIGHT)
            .map(|i| glyphs.iter().map(|g| g.row(i)).collect::<String>())
            .collect::<Vec<String>>()
            .join("\n")
    }

    /// Split a block into exactly three rows padded to full width.
    ///
    /// Tolerates one empty leading line (blocks written starting with a
    /// newline) and one blank trailing separator line.
    fn rows(block: &str) -> Result<[Vec<char>; GLYPH_HEIGHT], Error> {
        let width = ACCOUNT_DIGITS * GLYPH_WIDTH;
        let mut lines = block.lines().collect::<Vec<&str>>();
        if lines.len() > GLYPH_HEIGHT && lines.first().is_some_and(|l| l.is_empty()) {
            lines.remove(0);
        }
        if lines.len() > GLYPH_HEIGHT && lines.last().is_some_and(|l| l.trim().is_empty()) {
            lines.pop();
        }
        if lines.len() != GLYPH_HEIGHT {
            return Err(Error::MalformedBlock(format!(
                "expected {} rows, found {}",
                GLYPH_HEIGHT,
                lines.len()
            )));
        }
        let mut rows: [Vec<char>; GLYPH_HEIGHT] = Default::default();
        for (i, (row, line)) in rows.iter_mut().zip(lines).enumerate() {
            let mut cells = line.chars().collect::<Vec<char>>();
            if cells.len() > width {
                return Err(Error::MalformedBlock(format!(
                    "row {} has {} columns, expected at most {}",
                    i,
                    cells.len(),
                    width
                )));
            }
            cells.resize(width, ' ');
            *row = cells;
        }
        Ok(rows)
    }
}

/// str parsing of the scanned block
impl TryFrom<&str> for Account {
    type Error = Error;
    fn try_from(block: &str) -> Result<Self, Self::Error> {
        let rows = Self::rows(block)?;
        let mut digits = [0u8; ACCOUNT_DIGITS];
        for (position, digit) in digits.iter_mut().enumerate() {
            *digit = Glyph::scan(&rows, position)
                .digit()
                .ok_or(Error::MalformedDigit { position })?;
        }
        log::trace!("scanned account {:?}", digits);
        Ok(Self(digits))
    }
}

impl From<Account> for u32 {
    fn from(account: Account) -> u32 {
        account.0.iter().fold(0, |n, &d| n * 10 + d as u32)
    }
}

impl Arbitrary for Account {
    fn random() -> Self {
        Self(std::array::from_fn(|_| rand::random_range(0..10u8)))
    }
}

impl std::fmt::Display for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.digits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_TO_NINE: &str = concat!(
        "    _  _     _  _  _  _  _ \n",
        "  | _| _||_||_ |_   ||_||_|\n",
        "  ||_  _|  | _||_|  ||_| _|",
    );

    #[test]
    fn parse_one_to_nine() {
        let account = Account::try_from(ONE_TO_NINE).unwrap();
        assert_eq!(account.digits(), "123456789");
    }

    #[test]
    fn parse_leading_newline() {
        let block = format!("\n{}\n", ONE_TO_NINE);
        let account = Account::try_from(block.as_str()).unwrap();
        assert_eq!(account.to_string(), "123456789");
    }

    #[test]
    fn parse_trailing_separator_row() {
        let block = format!("{}\n{}", ONE_TO_NINE, " ".repeat(27));
        let account = Account::try_from(block.as_str()).unwrap();
        assert_eq!(u32::from(account), 123456789);
    }

    #[test]
    fn parse_trimmed_ones() {
        let block = concat!("\n", "\n", "  |  |  |  |  |  |  |  |  |\n", "  |  |  |  |  |  |  |  |  |");
        let account = Account::try_from(block).unwrap();
        assert_eq!(account.digits(), "111111111");
    }

    #[test]
    fn render_one_to_nine() {
        let account = Account::try_from_digits("123456789").unwrap();
        assert_eq!(account.glyphs(), ONE_TO_NINE);
    }

    #[test]
    fn bijective_glyphs() {
        for _ in 0..256 {
            let account = Account::random();
            let parsed = Account::try_from(account.glyphs().as_str()).unwrap();
            assert_eq!(account, parsed);
        }
    }

    #[test]
    fn malformed_digit_position() {
        let block = ONE_TO_NINE.replacen("|_||_ ", "|_|| |", 1);
        let result = Account::try_from(block.as_str());
        assert_eq!(result, Err(Error::MalformedDigit { position: 4 }));
    }

    #[test]
    fn malformed_row_count() {
        let block = ONE_TO_NINE.lines().take(2).collect::<Vec<_>>().join("\n");
        assert!(matches!(
            Account::try_from(block.as_str()),
            Err(Error::MalformedBlock(_))
        ));
    }

    #[test]
    fn malformed_row_width() {
        let block = ONE_TO_NINE.replacen('\n', "   \n", 1);
        assert!(matches!(
            Account::try_from(block.as_str()),
            Err(Error::MalformedBlock(_))
        ));
    }

    #[test]
    fn checksum() {
        assert!(Account::try_from_digits("345882865").unwrap().is_valid());
        assert!(Account::try_from_digits("000000000").unwrap().is_valid());
        assert!(!Account::try_from_digits("111111111").unwrap().is_valid());
    }

    #[test]
    fn digits_reject_letters() {
        assert!(Account::try_from_digits("12345678x").is_err());
        assert!(Account::try_from_digits("1234").is_err());
    }
}
