/// A (row, column) pair addressing one cell of a square board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether this position lies inside a board of side `size`
    pub const fn is_within(self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Shift by a signed (row, col) delta.
    /// Returns `None` when the result leaves `[0, size) x [0, size)`.
    pub fn offset(self, d_row: isize, d_col: isize, size: usize) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        let shifted = Self::new(row, col);
        shifted.is_within(size).then_some(shifted)
    }

    /// Row-major index into a flat `size * size` buffer
    pub const fn index(self, size: usize) -> usize {
        self.row * size + self.col
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}
