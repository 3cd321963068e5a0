use super::figure::Figure;
use super::heading::Heading;
use super::rectangle::Rectangle;
use crate::Error;

/// Lazily yields the rectangles tiling an ASCII figure.
///
/// The figure is scanned row-major for `+` corners with edges leaving east
/// and south. From each, the walk follows edges clockwise keeping the piece
/// on its right, turning right at the first `+` that allows it. A walk that
/// closes after exactly four right turns traced a rectangle. A walk that
/// closes turning left overall traced the outside of the figure and is
/// skipped.
///
/// Every `+` the walk leaves eastward is claimed. The piece to the south of
/// that edge is then known, so no piece is traced twice, while walls shared
/// between neighbours stay available from their other side.
///
/// Single pass and fused: after the last rectangle, or after the first
/// error, the iterator only yields `None`.
pub struct Decomposition {
    figure: Figure,
    claimed: Vec<Vec<bool>>,
    cursor: (usize, usize),
    done: bool,
}

/// Decompose a figure given as text.
pub fn decompose(figure: &str) -> Decomposition {
    Decomposition::from(Figure::from(figure))
}

impl From<Figure> for Decomposition {
    fn from(figure: Figure) -> Self {
        let claimed = vec![vec![false; figure.width()]; figure.height()];
        Self {
            done: figure.width() == 0,
            figure,
            claimed,
            cursor: (0, 0),
        }
    }
}

impl Decomposition {
    /// next unclaimed corner at or after the cursor
    fn seek(&mut self) -> Option<(usize, usize)> {
        while self.cursor.0 < self.figure.height() {
            let pos = self.cursor;
            self.cursor = match pos.1 + 1 {
                col if col < self.figure.width() => (pos.0, col),
                _ => (pos.0 + 1, 0),
            };
            if !self.claimed[pos.0][pos.1] && self.figure.is_corner(pos) {
                return Some(pos);
            }
        }
        None
    }

    /// walk the piece south of the east edge leaving `start`
    fn trace(&mut self, start: (usize, usize)) -> Result<Option<Rectangle>, Error> {
        let malformed = |(row, col): (usize, usize), reason| Error::MalformedFigure { row, col, reason };
        let limit = 4 * self.figure.width() * self.figure.height();
        let mut pos = start;
        let mut heading = Heading::E;
        let mut rights = 0usize;
        let mut lefts = 0usize;
        let mut rect = Rectangle {
            top: start.0,
            left: start.1,
            bottom: start.0,
            right: start.1,
        };
        self.claimed[start.0][start.1] = true;
        for _ in 0..limit {
            pos = heading
                .step(pos)
                .filter(|&next| self.figure.contains(next))
                .ok_or_else(|| malformed(pos, "edge runs off the figure"))?;
            rect.top = rect.top.min(pos.0);
            rect.left = rect.left.min(pos.1);
            rect.bottom = rect.bottom.max(pos.0);
            rect.right = rect.right.max(pos.1);
            match self.figure.at(pos) {
                '+' => {
                    let turn = [heading.right(), heading, heading.left()]
                        .into_iter()
                        .find(|&h| self.figure.branches(pos, h))
                        .ok_or_else(|| malformed(pos, "dead-end corner"))?;
                    if turn == heading.right() {
                        rights += 1;
                    } else if turn == heading.left() {
                        lefts += 1;
                    }
                    heading = turn;
                    if heading == Heading::E {
                        if pos == start {
                            return match (rights, lefts) {
                                (4, 0) => Ok(Some(rect)),
                                (r, l) if l == r + 4 => {
                                    log::debug!("skipping outer boundary at {:?}", start);
                                    Ok(None)
                                }
                                _ => Err(malformed(start, "piece is not a rectangle")),
                            };
                        }
                        self.claimed[pos.0][pos.1] = true;
                    }
                }
                c if c == heading.edge() => continue,
                _ => return Err(malformed(pos, "broken edge")),
            }
        }
        Err(malformed(start, "boundary never closes"))
    }
}

impl Iterator for Decomposition {
    type Item = Result<Rectangle, Error>;
    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            match self.seek() {
                None => self.done = true,
                Some(start) => match self.trace(start) {
                    Ok(None) => continue,
                    Ok(Some(rect)) => {
                        log::debug!("rectangle {}x{} at {:?}", rect.width(), rect.height(), start);
                        return Some(Ok(rect));
                    }
                    Err(e) => {
                        self.done = true;
                        return Some(Err(e));
                    }
                },
            }
        }
        None
    }
}

impl std::iter::FusedIterator for Decomposition {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const SPLIT: &str = "\
+------------+
|            |
|            |
|            |
+------+-----+
|      |     |
|      |     |
+------+-----+";

    fn blocks(figure: &str) -> Vec<String> {
        decompose(figure)
            .map(|r| r.unwrap().to_string())
            .collect()
    }

    #[test]
    fn split_box() {
        let blocks = blocks(SPLIT);
        assert_eq!(blocks.len(), 3);
        assert!(blocks.contains(&"+------------+\n|            |\n|            |\n|            |\n+------------+".to_string()));
        assert!(blocks.contains(&"+------+\n|      |\n|      |\n+------+".to_string()));
        assert!(blocks.contains(&"+-----+\n|     |\n|     |\n+-----+".to_string()));
    }

    #[test]
    fn single_box() {
        assert_eq!(blocks("+--+\n|  |\n+--+"), vec!["+--+\n|  |\n+--+"]);
    }

    #[test]
    fn empty_figure() {
        assert_eq!(decompose("").count(), 0);
        assert_eq!(decompose("   \n   ").count(), 0);
    }

    #[test]
    fn lattice_no_duplicates() {
        let figure = "\
+--+--+--+
|  |  |  |
+--+--+--+
|  |  |  |
+--+--+--+";
        let rects = decompose(figure)
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        let unique = rects.iter().copied().collect::<HashSet<_>>();
        assert_eq!(rects.len(), 6);
        assert_eq!(unique.len(), 6);
        assert!(rects.iter().all(|r| r.width() == 4 && r.height() == 3));
    }

    #[test]
    fn outer_boundary_skipped() {
        let figure = "\
+-------+
|       |
+---+---+
|   |
+---+";
        let rects = decompose(figure)
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        assert_eq!(rects.len(), 2);
        assert!(rects.contains(&Rectangle { top: 0, left: 0, bottom: 2, right: 8 }));
        assert!(rects.contains(&Rectangle { top: 2, left: 0, bottom: 4, right: 4 }));
    }

    #[test]
    fn nested_island() {
        let figure = "\
+--------+
|        |
|  +--+  |
|  |  |  |
|  +--+  |
|        |
+--------+";
        let rects = decompose(figure)
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        assert_eq!(rects.len(), 2);
        assert!(rects.contains(&Rectangle { top: 0, left: 0, bottom: 6, right: 9 }));
        assert!(rects.contains(&Rectangle { top: 2, left: 3, bottom: 4, right: 6 }));
    }

    #[test]
    fn touching_corners() {
        let figure = "\
+--+
|  |
+--+--+
   |  |
   +--+";
        let rects = decompose(figure)
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        assert_eq!(rects.len(), 2);
    }

    #[test]
    fn border_cells_covered_once_per_side() {
        let figure = Figure::from(SPLIT);
        let rects = Decomposition::from(figure.clone())
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        let mut cells = HashSet::new();
        for r in rects.iter() {
            for row in r.top..=r.bottom {
                for col in r.left..=r.right {
                    let border = row == r.top || row == r.bottom || col == r.left || col == r.right;
                    if border {
                        cells.insert((row, col));
                    } else {
                        assert_eq!(figure.at((row, col)), ' ');
                    }
                }
            }
        }
        assert_eq!(cells.len(), figure.outline());
    }

    #[test]
    fn broken_edge() {
        let mut iter = decompose("+--+\n|  |\n+- +");
        assert!(matches!(iter.next(), Some(Err(Error::MalformedFigure { .. }))));
        assert!(iter.next().is_none());
    }

    #[test]
    fn l_shaped_piece() {
        let figure = "\
+-------+
|       |
|   +---+
|   |
+---+";
        let mut iter = decompose(figure);
        assert!(matches!(iter.next(), Some(Err(Error::MalformedFigure { .. }))));
        assert!(iter.next().is_none());
    }

    #[test]
    fn lazy_first_only() {
        let mut iter = decompose(SPLIT);
        let first = iter.next().unwrap().unwrap();
        assert_eq!(first, Rectangle { top: 0, left: 0, bottom: 4, right: 13 });
    }
}
