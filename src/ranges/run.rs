use crate::RUN_MINIMUM;

/// A maximal stretch of consecutive integers, `start..=end`.
///
/// Displays as `start-end` once it spans [`RUN_MINIMUM`] values,
/// otherwise as its values written out: `4,5`. Bounds are always
/// ordered, `start <= end`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Run {
    start: i64,
    end: i64,
}

impl Run {
    pub fn start(&self) -> i64 {
        self.start
    }
    pub fn end(&self) -> i64 {
        self.end
    }
    /// distance from first to last value
    pub fn span(&self) -> u64 {
        self.end.abs_diff(self.start)
    }
    pub fn is_range(&self) -> bool {
        self.span() >= RUN_MINIMUM as u64 - 1
    }
}

impl From<i64> for Run {
    fn from(n: i64) -> Self {
        Self { start: n, end: n }
    }
}

/// bounds in either order
impl From<(i64, i64)> for Run {
    fn from((a, b): (i64, i64)) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }
}

impl std::fmt::Display for Run {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.span() {
            0 => write!(f, "{}", self.start),
            _ if self.is_range() => write!(f, "{}-{}", self.start, self.end),
            _ => write!(
                f,
                "{}",
                (self.start..=self.end)
                    .map(|n| n.to_string())
                    .collect::<Vec<_>>()
                    .join(",")
            ),
        }
    }
}
