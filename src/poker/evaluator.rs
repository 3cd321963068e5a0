use super::hand::Hand;
use super::ranking::Ranking;
use super::suit::Suit;
use crate::Error;
use crate::HAND_SIZE;

/// A-2-3-4-5 as a rank mask, the one straight where Ace plays low
const WHEEL: u16 = 0b_1000000001111;

/// Classifies a five-card [`Hand`].
///
/// Straights and flushes are read off bitmasks; everything else
/// falls out of the multiset of rank multiplicities.
pub struct Evaluator(Hand);
impl From<Hand> for Evaluator {
    fn from(h: Hand) -> Self {
        Self(h)
    }
}

impl Evaluator {
    pub fn ranking(&self) -> Ranking {
        let ranking = match (self.is_straight(), self.is_flush()) {
            (true, true) => Ranking::StraightFlush,
            (true, false) => Ranking::Straight,
            (false, true) => Ranking::Flush,
            (false, false) => self.by_multiplicity(),
        };
        log::trace!("{:<20} {}", self.0, ranking);
        ranking
    }

    /// five distinct ranks, either consecutive or the wheel
    fn is_straight(&self) -> bool {
        let ranks = u16::from(self.0);
        if ranks.count_ones() as usize != HAND_SIZE {
            return false;
        }
        let mut bits = ranks;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        bits > 0 || ranks == WHEEL
    }
    fn is_flush(&self) -> bool {
        Suit::all().iter().any(|s| self.0.count(s) == HAND_SIZE)
    }
    /// rank counts, largest first: e.g. [3, 2] for a full house
    fn multiplicity(&self) -> Vec<usize> {
        let mut counts = [0usize; 13];
        for card in self.0.cards() {
            counts[u8::from(card.rank()) as usize] += 1;
        }
        let mut counts = counts
            .into_iter()
            .filter(|&n| n > 0)
            .collect::<Vec<usize>>();
        counts.sort_unstable_by(|a, b| b.cmp(a));
        counts
    }
    fn by_multiplicity(&self) -> Ranking {
        match self.multiplicity().as_slice() {
            [4, 1] => Ranking::FourOfKind,
            [3, 2] => Ranking::FullHouse,
            [3, 1, 1] => Ranking::ThreeOfKind,
            [2, 2, 1] => Ranking::TwoPairs,
            [2, 1, 1, 1] => Ranking::OnePair,
            _ => Ranking::HighCard,
        }
    }
}

/// Classify a hand given as card tokens, e.g. `["A♠", "4♠", "3♠", "5♠", "2♠"]`.
pub fn classify(tokens: &[&str]) -> Result<Ranking, Error> {
    Hand::try_from(tokens).map(|hand| hand.ranking())
}
