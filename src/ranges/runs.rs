use super::run::Run;

/// Groups a sorted slice of distinct integers into maximal [`Run`]s.
pub struct Runs<'a> {
    values: &'a [i64],
    index: usize,
}

impl<'a> From<&'a [i64]> for Runs<'a> {
    fn from(values: &'a [i64]) -> Self {
        Self { values, index: 0 }
    }
}

impl Iterator for Runs<'_> {
    type Item = Run;
    fn next(&mut self) -> Option<Self::Item> {
        let start = *self.values.get(self.index)?;
        let mut end = start;
        self.index += 1;
        while let Some(&n) = self.values.get(self.index) {
            if end.checked_add(1) != Some(n) {
                break;
            }
            end = n;
            self.index += 1;
        }
        Some(Run::from((start, end)))
    }
}

impl std::iter::FusedIterator for Runs<'_> {}
