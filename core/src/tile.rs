use core::fmt;

/// What a cell holds once mines are placed: a mine or the number of adjacent mines.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellValue {
    Mine,
    Count(u8),
}

impl CellValue {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    /// Whether revealing this cell cascades into its neighbors.
    pub const fn is_zero(self) -> bool {
        matches!(self, Self::Count(0))
    }
}

impl Default for CellValue {
    fn default() -> Self {
        Self::Count(0)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mine => f.pad("*"),
            Self::Count(count) => fmt::Display::fmt(count, f),
        }
    }
}
