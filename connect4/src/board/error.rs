/// The error type for accessing a cell outside of the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OutOfBounds {
    pub row: i8,
    pub col: i8,
}

impl std::error::Error for OutOfBounds {}

impl std::fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cell ({}, {}) is out of the bounds of the {}x{} grid",
            self.row,
            self.col,
            super::ROWS,
            super::COLUMNS
        )
    }
}
