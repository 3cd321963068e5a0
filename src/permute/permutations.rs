/// Lazy iterator over all n! orderings of a string's characters.
///
/// Built by iterative insertion: the k-th symbol is inserted into each of
/// the k + 1 gaps of every ordering of the symbols before it. Rather than
/// materializing each generation, the iterator keeps one insertion slot per
/// symbol and counts through them like an odometer, so every combination of
/// slots is exactly one ordering.
///
/// Characters are treated as distinct positions; repeated characters
/// produce repeated orderings.
///
/// # Performance
///
/// - Memory: O(n), only the symbols and their slots
/// - Time per `.next()`: O(n²) to assemble the ordering by insertion
pub struct Permutations {
    symbols: Vec<char>,
    slots: Vec<usize>,
    emitted: usize,
    done: bool,
}

/// Permute the characters of `symbols`.
pub fn permutations(symbols: &str) -> Permutations {
    Permutations::from(symbols)
}

impl Permutations {
    /// n!, or None if it does not fit a usize
    pub fn total(&self) -> Option<usize> {
        (1..=self.symbols.len()).try_fold(1usize, |acc, k| acc.checked_mul(k))
    }
    /// insert each symbol at its slot
    fn look(&self) -> String {
        let mut ordering = Vec::with_capacity(self.symbols.len());
        for (&symbol, &slot) in self.symbols.iter().zip(self.slots.iter()) {
            ordering.insert(slot, symbol);
        }
        ordering.into_iter().collect()
    }
    /// odometer increment, slot k counts 0..=k
    fn advance(&mut self) {
        for k in (0..self.slots.len()).rev() {
            if self.slots[k] < k {
                self.slots[k] += 1;
                return;
            }
            self.slots[k] = 0;
        }
        self.done = true;
    }
}

impl Iterator for Permutations {
    type Item = String;
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            None
        } else {
            let ordering = self.look();
            self.advance();
            self.emitted += 1;
            Some(ordering)
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        match (self.done, self.total()) {
            (true, _) => (0, Some(0)),
            (false, Some(total)) => (total - self.emitted, Some(total - self.emitted)),
            (false, None) => (usize::MAX, None),
        }
    }
}

impl std::iter::FusedIterator for Permutations {}

/// str construction, nothing is emitted for the empty string
impl From<&str> for Permutations {
    fn from(symbols: &str) -> Self {
        let symbols = symbols.chars().collect::<Vec<char>>();
        Self {
            slots: vec![0; symbols.len()],
            done: symbols.is_empty(),
            emitted: 0,
            symbols,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::seq::SliceRandom;
    use std::collections::HashSet;

    fn sorted(s: &str) -> Vec<char> {
        let mut chars = s.chars().collect::<Vec<_>>();
        chars.sort();
        chars
    }

    #[test]
    fn abc() {
        let all = permutations("abc").collect::<HashSet<String>>();
        let expected = ["abc", "acb", "bac", "bca", "cab", "cba"]
            .into_iter()
            .map(String::from)
            .collect::<HashSet<String>>();
        assert_eq!(all, expected);
    }

    #[test]
    fn n_factorial_distinct() {
        let ref mut rng = rand::rng();
        let mut alphabet = ('a'..='z').collect::<Vec<char>>();
        for n in 1..=6 {
            alphabet.shuffle(rng);
            let symbols = alphabet[..n].iter().collect::<String>();
            let all = permutations(&symbols).collect::<Vec<String>>();
            let unique = all.iter().cloned().collect::<HashSet<String>>();
            let factorial = (1..=n).product::<usize>();
            assert_eq!(all.len(), factorial);
            assert_eq!(unique.len(), factorial);
            assert!(all.iter().all(|p| sorted(p) == sorted(&symbols)));
        }
    }

    #[test]
    fn empty() {
        assert_eq!(permutations("").count(), 0);
    }

    #[test]
    fn single() {
        assert_eq!(permutations("x").collect::<Vec<_>>(), vec!["x"]);
    }

    #[test]
    fn duplicates_are_positions() {
        assert_eq!(permutations("aa").collect::<Vec<_>>(), vec!["aa", "aa"]);
    }

    #[test]
    fn exact_size_hint() {
        let mut iter = permutations("abcd");
        assert_eq!(iter.size_hint(), (24, Some(24)));
        iter.next();
        assert_eq!(iter.size_hint(), (23, Some(23)));
        assert_eq!(iter.by_ref().count(), 23);
        assert_eq!(iter.next(), None);
    }
}
