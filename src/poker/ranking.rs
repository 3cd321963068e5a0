/// A five-card hand category.
///
/// Variants are ordered weakest to strongest, so the derived `Ord`
/// compares categories. Kickers are not tracked; two hands in the
/// same category compare equal.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ranking {
    HighCard = 0,
    OnePair = 1,
    TwoPairs = 2,
    ThreeOfKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfKind = 7,
    StraightFlush = 8,
}

impl Ranking {
    pub const fn all() -> [Ranking; 9] {
        [
            Ranking::HighCard,
            Ranking::OnePair,
            Ranking::TwoPairs,
            Ranking::ThreeOfKind,
            Ranking::Straight,
            Ranking::Flush,
            Ranking::FullHouse,
            Ranking::FourOfKind,
            Ranking::StraightFlush,
        ]
    }
}

impl From<Ranking> for u8 {
    fn from(r: Ranking) -> u8 {
        r as u8
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::HighCard => write!(f, "HighCard"),
            Ranking::OnePair => write!(f, "OnePair"),
            Ranking::TwoPairs => write!(f, "TwoPairs"),
            Ranking::ThreeOfKind => write!(f, "ThreeOfKind"),
            Ranking::Straight => write!(f, "Straight"),
            Ranking::Flush => write!(f, "Flush"),
            Ranking::FullHouse => write!(f, "FullHouse"),
            Ranking::FourOfKind => write!(f, "FourOfKind"),
            Ranking::StraightFlush => write!(f, "StraightFlush"),
        }
    }
}
