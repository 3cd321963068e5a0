use super::rank::Rank;
use super::suit::Suit;
use crate::Error;

/// A playing card encoded as a single byte.
///
/// The 52 cards map to `0..52` as `rank * 4 + suit`, so cards sort
/// by rank first, then by suit within each rank.
///
/// Cards parse from a rank symbol followed by a suit symbol:
/// `"10♥"`, `"A♠"`, `"Ts"`, `"4c"`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card(u8);

impl Card {
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / 4)
    }
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % 4)
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * 4 + u8::from(s))
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0..52
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        debug_assert!(n < 52);
        Self(n)
    }
}

/// u64 representation
/// each card is just one bit turned on. this is a one-way morphism
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

/// str isomorphism
/// the suit is the last char, everything before it is the rank
impl TryFrom<&str> for Card {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        let (split, _) = s
            .char_indices()
            .last()
            .ok_or_else(|| Error::InvalidCard("empty card".into()))?;
        let rank = Rank::try_from(&s[..split])?;
        let suit = Suit::try_from(&s[split..])?;
        Ok(Card::from((rank, suit)))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_rank_suit() {
        let card = Card::from((Rank::Jack, Suit::D));
        assert!(card.rank() == Rank::Jack);
        assert!(card.suit() == Suit::D);
    }

    #[test]
    fn bijective_u8() {
        for n in 0..52u8 {
            assert!(n == u8::from(Card::from(n)));
        }
    }

    #[test]
    fn parse_unicode() {
        let card = Card::try_from("10♥").unwrap();
        assert_eq!(card, Card::from((Rank::Ten, Suit::H)));
        assert_eq!(card.to_string(), "10♥");
    }

    #[test]
    fn parse_ascii() {
        assert_eq!(Card::try_from("Ts"), Ok(Card::from((Rank::Ten, Suit::S))));
        assert_eq!(Card::try_from(" 4c "), Ok(Card::from((Rank::Four, Suit::C))));
    }

    #[test]
    fn reject_garbage() {
        assert!(Card::try_from("").is_err());
        assert!(Card::try_from("♠").is_err());
        assert!(Card::try_from("11♠").is_err());
        assert!(Card::try_from("Ax").is_err());
    }
}
