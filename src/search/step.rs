/// A move to a 4-adjacent cell.
///
/// [`Step::all`] lists them in search preference order.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Step {
    Right,
    Left,
    Down,
    Up,
}

impl Step {
    pub const fn all() -> [Step; 4] {
        [Step::Right, Step::Left, Step::Down, Step::Up]
    }
    /// neighbouring cell, None when it would fall outside `rows × cols`
    pub fn apply(&self, (row, col): (usize, usize), rows: usize, cols: usize) -> Option<(usize, usize)> {
        let (row, col) = match self {
            Step::Right => (Some(row), col.checked_add(1)),
            Step::Left => (Some(row), col.checked_sub(1)),
            Step::Down => (row.checked_add(1), Some(col)),
            Step::Up => (row.checked_sub(1), Some(col)),
        };
        match (row, col) {
            (Some(row), Some(col)) if row < rows && col < cols => Some((row, col)),
            _ => None,
        }
    }
}
