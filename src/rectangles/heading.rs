/// Compass direction of a walk along the figure's edges.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Heading {
    N,
    E,
    S,
    W,
}

impl Heading {
    /// quarter turn clockwise
    pub fn right(self) -> Self {
        match self {
            Heading::N => Heading::E,
            Heading::E => Heading::S,
            Heading::S => Heading::W,
            Heading::W => Heading::N,
        }
    }
    /// quarter turn counterclockwise
    pub fn left(self) -> Self {
        match self {
            Heading::N => Heading::W,
            Heading::E => Heading::N,
            Heading::S => Heading::E,
            Heading::W => Heading::S,
        }
    }
    /// the edge character drawn along this heading
    pub fn edge(self) -> char {
        match self {
            Heading::N | Heading::S => '|',
            Heading::E | Heading::W => '-',
        }
    }
    /// one cell further, None when stepping off the top or left margin
    pub fn step(self, (row, col): (usize, usize)) -> Option<(usize, usize)> {
        match self {
            Heading::N => row.checked_sub(1).map(|row| (row, col)),
            Heading::E => Some((row, col + 1)),
            Heading::S => Some((row + 1, col)),
            Heading::W => col.checked_sub(1).map(|col| (row, col)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_rights_make_a_circle() {
        let heading = Heading::N;
        assert_eq!(heading.right().right().right().right(), heading);
        assert_eq!(heading.right().left(), heading);
    }

    #[test]
    fn step_fails_closed_at_margin() {
        assert_eq!(Heading::N.step((0, 3)), None);
        assert_eq!(Heading::W.step((3, 0)), None);
        assert_eq!(Heading::S.step((0, 3)), Some((1, 3)));
    }
}
