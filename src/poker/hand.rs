use super::card::Card;
use super::ranking::Ranking;
use super::suit::Suit;
use crate::Arbitrary;
use crate::Error;
use crate::HAND_SIZE;

/// Exactly five distinct cards, stored as a 52-bit set.
///
/// Order of the input cards is forgotten on construction, which is
/// what makes classification independent of card order.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u64);

impl Hand {
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }
    /// Number of cards of one suit.
    pub fn count(&self, suit: &Suit) -> usize {
        (self.0 & u64::from(*suit)).count_ones() as usize
    }
    /// Cards in ascending deck order.
    pub fn cards(&self) -> Vec<Card> {
        (0..52u8)
            .filter(|n| self.0 & (1 << n) != 0)
            .map(Card::from)
            .collect()
    }
    pub fn ranking(&self) -> Ranking {
        super::evaluator::Evaluator::from(*self).ranking()
    }
}

/// Vec<Card> parsing, rejects wrong sizes and repeats
impl TryFrom<Vec<Card>> for Hand {
    type Error = Error;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        if cards.len() != HAND_SIZE {
            return Err(Error::InvalidHand(format!(
                "expected {} cards, found {}",
                HAND_SIZE,
                cards.len()
            )));
        }
        let bits = cards.iter().map(|c| u64::from(*c)).fold(0u64, |a, b| a | b);
        match Self(bits) {
            hand if hand.size() == HAND_SIZE => Ok(hand),
            _ => Err(Error::InvalidHand(format!(
                "duplicate cards in {}",
                cards
                    .iter()
                    .map(|c| c.to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            ))),
        }
    }
}

/// token slice parsing, e.g. ["4♣", "4♦", "4♥", "4♠", "10♥"]
impl TryFrom<&[&str]> for Hand {
    type Error = Error;
    fn try_from(tokens: &[&str]) -> Result<Self, Self::Error> {
        tokens
            .iter()
            .map(|s| Card::try_from(*s))
            .collect::<Result<Vec<Card>, _>>()
            .and_then(Self::try_from)
    }
}

/// whitespace separated str parsing
impl TryFrom<&str> for Hand {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(s.split_whitespace().collect::<Vec<_>>().as_slice())
    }
}

/// u64 representation
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

/// one-way conversion to u16 Rank masks
/// zero-allocation, zero iteration. just shredding bits
impl From<Hand> for u16 {
    fn from(h: Hand) -> Self {
        let mut x = u64::from(h);
        x |= x >> 1;
        x |= x >> 2;
        x &= 0x1111111111111;
        let mut y = u64::default();
        y |= (x >> 00) & 0x0001;
        y |= (x >> 03) & 0x0002;
        y |= (x >> 06) & 0x0004;
        y |= (x >> 09) & 0x0008;
        y |= (x >> 12) & 0x0010;
        y |= (x >> 15) & 0x0020;
        y |= (x >> 18) & 0x0040;
        y |= (x >> 21) & 0x0080;
        y |= (x >> 24) & 0x0100;
        y |= (x >> 27) & 0x0200;
        y |= (x >> 30) & 0x0400;
        y |= (x >> 33) & 0x0800;
        y |= (x >> 36) & 0x1000;
        y as u16
    }
}

/// five distinct cards sampled without replacement
impl Arbitrary for Hand {
    fn random() -> Self {
        let ref mut rng = rand::rng();
        let bits = rand::seq::index::sample(rng, 52, HAND_SIZE)
            .into_iter()
            .map(|i| 1u64 << i)
            .fold(0u64, |a, b| a | b);
        Self(bits)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = self.cards().iter().map(|c| c.to_string()).collect::<Vec<_>>();
        write!(f, "{}", cards.join(" "))
    }
}
