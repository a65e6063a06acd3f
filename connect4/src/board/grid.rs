use super::{OutOfBounds, COLUMNS, ROWS};
use crate::Cell;

/// Plain storage for the 6x7 cells of a board.
///
/// Row 0 is the top row, row 5 the bottom row that pieces fall towards.
/// There are no game rules in here, only bounds checking.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [[Cell; COLUMNS as usize]; ROWS as usize],
}

impl Grid {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [[Cell; COLUMNS as usize]; ROWS as usize]) -> Self {
        Self { cells }
    }

    pub fn get(&self, row: i8, col: i8) -> Result<Cell, OutOfBounds> {
        let (i, j) = local_coords(row, col).ok_or(OutOfBounds { row, col })?;
        Ok(self.cells[i][j])
    }

    pub(crate) fn set(&mut self, row: i8, col: i8, cell: Cell) -> Result<(), OutOfBounds> {
        let (i, j) = local_coords(row, col).ok_or(OutOfBounds { row, col })?;
        self.cells[i][j] = cell;
        Ok(())
    }

    pub fn is_in_bounds(row: i8, col: i8) -> bool {
        local_coords(row, col).is_some()
    }

    /// The rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; COLUMNS as usize]> + '_ {
        self.cells.iter()
    }

    pub fn cells(&self) -> &[[Cell; COLUMNS as usize]; ROWS as usize] {
        &self.cells
    }

    /// The number of occupied cells.
    pub fn count_pieces(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    // Unchecked access for callers that iterate over known-good ranges
    pub(crate) fn at(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }
}

// Check that the coordinates are valid and convert them into array indices
fn local_coords(row: i8, col: i8) -> Option<(usize, usize)> {
    let i = usize::try_from(row).ok()?;
    let j = usize::try_from(col).ok()?;
    if i < ROWS as usize && j < COLUMNS as usize {
        Some((i, j))
    } else {
        None
    }
}
