/// One rectangle found in a figure, located by its corner cells.
///
/// Displays as its own text block: `+` corners, `-` and `|` edges,
/// blank interior. Any walls that crossed its edges in the original
/// figure are not drawn.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rectangle {
    pub top: usize,
    pub left: usize,
    pub bottom: usize,
    pub right: usize,
}

impl Rectangle {
    /// columns spanned, corners included
    pub fn width(&self) -> usize {
        self.right - self.left + 1
    }
    /// rows spanned, corners included
    pub fn height(&self) -> usize {
        self.bottom - self.top + 1
    }
    /// blank cells strictly inside the border
    pub fn interior(&self) -> usize {
        (self.width() - 2) * (self.height() - 2)
    }
    /// the rendered text block
    pub fn block(&self) -> String {
        let span = self.width() - 2;
        let edge = format!("+{}+", "-".repeat(span));
        let wall = format!("|{}|", " ".repeat(span));
        std::iter::once(edge.clone())
            .chain(std::iter::repeat_n(wall, self.height() - 2))
            .chain(std::iter::once(edge))
            .collect::<Vec<String>>()
            .join("\n")
    }
}

impl std::fmt::Display for Rectangle {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.block())
    }
}
