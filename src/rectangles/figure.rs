use super::heading::Heading;

/// A multi-line ASCII figure padded out to a full rectangle of cells.
///
/// Ragged input is fine: short rows read as blanks, and so does
/// everything past the figure's edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Figure {
    cells: Vec<Vec<char>>,
    width: usize,
}

impl Figure {
    pub fn height(&self) -> usize {
        self.cells.len()
    }
    pub fn width(&self) -> usize {
        self.width
    }
    /// character at a cell, blank when out of bounds
    pub fn at(&self, (row, col): (usize, usize)) -> char {
        self.cells
            .get(row)
            .and_then(|cells| cells.get(col))
            .copied()
            .unwrap_or(' ')
    }
    pub fn contains(&self, (row, col): (usize, usize)) -> bool {
        row < self.height() && col < self.width()
    }
    /// does an edge leave this cell along `heading`?
    pub fn branches(&self, pos: (usize, usize), heading: Heading) -> bool {
        heading
            .step(pos)
            .map(|next| self.at(next))
            .is_some_and(|c| c == heading.edge() || c == '+')
    }
    /// a `+` with edges leaving east and south can open a rectangle
    pub fn is_corner(&self, pos: (usize, usize)) -> bool {
        self.at(pos) == '+' && self.branches(pos, Heading::E) && self.branches(pos, Heading::S)
    }
    /// count of `+`, `-` and `|` cells
    pub fn outline(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| matches!(c, '+' | '-' | '|'))
            .count()
    }
}

/// str parsing, rows padded to the widest line
impl From<&str> for Figure {
    fn from(s: &str) -> Self {
        let mut cells = s
            .lines()
            .map(|line| line.chars().collect::<Vec<char>>())
            .collect::<Vec<_>>();
        let width = cells.iter().map(|row| row.len()).max().unwrap_or(0);
        cells.iter_mut().for_each(|row| row.resize(width, ' '));
        Self { cells, width }
    }
}

impl std::fmt::Display for Figure {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let rows = self
            .cells
            .iter()
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>();
        write!(f, "{}", rows.join("\n"))
    }
}
