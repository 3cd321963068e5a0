use super::step::Step;
use crate::Error;

/// A rectangular grid of characters to search for snaking words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<char>>,
    cols: usize,
}

impl Grid {
    pub fn rows(&self) -> usize {
        self.cells.len()
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    /// character at a cell, None when out of bounds
    pub fn at(&self, (row, col): (usize, usize)) -> Option<char> {
        self.cells.get(row).and_then(|cells| cells.get(col)).copied()
    }

    /// Is the word traceable as a self-avoiding path of adjacent cells?
    pub fn contains(&self, word: &str) -> bool {
        self.path(word).is_some()
    }

    /// The first path spelling `word`, as (row, col) cells in order.
    ///
    /// Depth-first from every cell holding the first letter, preferring
    /// right, left, down, up, and backing out of any partial path that
    /// cannot be extended. The empty word is found along the empty path.
    pub fn path(&self, word: &str) -> Option<Vec<(usize, usize)>> {
        let word = word.chars().collect::<Vec<char>>();
        if word.is_empty() {
            return Some(Vec::new());
        }
        let mut visited = vec![vec![false; self.cols()]; self.rows()];
        let mut path = Vec::with_capacity(word.len());
        let found = (0..self.rows())
            .flat_map(|row| (0..self.cols()).map(move |col| (row, col)))
            .any(|start| self.extend(start, &word, &mut visited, &mut path));
        found.then_some(path)
    }

    fn extend(
        &self,
        pos: (usize, usize),
        word: &[char],
        visited: &mut Vec<Vec<bool>>,
        path: &mut Vec<(usize, usize)>,
    ) -> bool {
        if self.at(pos) != Some(word[0]) {
            return false;
        }
        visited[pos.0][pos.1] = true;
        path.push(pos);
        if word.len() == 1 {
            return true;
        }
        for step in Step::all() {
            if let Some(next) = step.apply(pos, self.rows(), self.cols()) {
                if !visited[next.0][next.1] && self.extend(next, &word[1..], visited, path) {
                    return true;
                }
            }
        }
        log::trace!("backtracking from {:?}", pos);
        visited[pos.0][pos.1] = false;
        path.pop();
        false
    }
}

/// row slice parsing, rejects ragged rows
impl TryFrom<&[&str]> for Grid {
    type Error = Error;
    fn try_from(rows: &[&str]) -> Result<Self, Self::Error> {
        let cells = rows
            .iter()
            .map(|row| row.chars().collect::<Vec<char>>())
            .collect::<Vec<_>>();
        let cols = cells.first().map(|row| row.len()).unwrap_or(0);
        match cells.iter().position(|row| row.len() != cols) {
            Some(row) => Err(Error::RaggedGrid {
                row,
                len: cells[row].len(),
                expected: cols,
            }),
            None => Ok(Self { cells, cols }),
        }
    }
}

/// newline separated str parsing
impl TryFrom<&str> for Grid {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(
            s.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .as_slice(),
        )
    }
}

/// Search rows of characters for a snaking word.
pub fn exists(rows: &[&str], word: &str) -> Result<bool, Error> {
    Grid::try_from(rows).map(|grid| grid.contains(word))
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let rows = self
            .cells
            .iter()
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>();
        write!(f, "{}", rows.join("\n"))
    }
}
