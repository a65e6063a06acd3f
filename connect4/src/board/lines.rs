use std::ops::Range;

use super::{Grid, COLUMNS, ROWS};
use crate::{Cell, Piece};

const LINE_LENGTH: usize = 4;

/// One of the four directions in which lines are scanned.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
    /// Top left to bottom right, like `\`.
    Diagonal,
    /// Bottom left to top right, like `/`.
    AntiDiagonal,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];

    // (row, col) increment from one cell of a run to the next
    fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (-1, 1),
        }
    }

    // Rows and columns of the first cell of each run. The first cell of
    // an anti-diagonal run is its bottom-left end.
    fn anchors(self) -> (Range<usize>, Range<usize>) {
        let rows = ROWS as usize;
        let cols = COLUMNS as usize;
        let reach = LINE_LENGTH - 1;
        match self {
            Direction::Horizontal => (0..rows, 0..cols - reach),
            Direction::Vertical => (0..rows - reach, 0..cols),
            Direction::Diagonal => (0..rows - reach, 0..cols - reach),
            Direction::AntiDiagonal => (reach..rows, 0..cols - reach),
        }
    }

    /// All runs of four cells in this direction that fit on the grid, as
    /// `(row, col)` coordinates. The last cell is the extension cell used by
    /// [`Grid::count_open_threes()`].
    pub fn runs(self) -> impl Iterator<Item = [(usize, usize); LINE_LENGTH]> {
        let (rows, cols) = self.anchors();
        let (di, dj) = self.step();
        rows.flat_map(move |i| cols.clone().map(move |j| (i, j)))
            .map(move |(i, j)| {
                std::array::from_fn::<_, LINE_LENGTH, _>(|k| {
                    // The anchor ranges keep every cell on the grid
                    let k = k as isize;
                    (
                        (i as isize + k * di) as usize,
                        (j as isize + k * dj) as usize,
                    )
                })
            })
    }
}

impl Grid {
    /// Counts runs of four cells in a row that all belong to `piece`.
    ///
    /// Overlapping runs are counted separately, so five in a row
    /// counts as two lines.
    pub fn count_completed_lines(&self, piece: Piece) -> u32 {
        let cell = Cell::from(piece);
        self.count_runs(|run| run.iter().all(|&c| c == cell))
    }

    /// Counts runs where the first three cells belong to `piece` and the
    /// fourth is either empty or also belongs to `piece`.
    ///
    /// Only the cell after the three is looked at, not the one before
    /// them, and not the one beyond the fourth.
    pub fn count_open_threes(&self, piece: Piece) -> u32 {
        let cell = Cell::from(piece);
        self.count_runs(|[a, b, c, ext]| {
            a == cell && b == cell && c == cell && (ext == cell || ext.is_empty())
        })
    }

    fn count_runs(&self, matches: impl Fn([Cell; LINE_LENGTH]) -> bool) -> u32 {
        let mut count = 0;
        for direction in Direction::ALL {
            for run in direction.runs() {
                if matches(run.map(|(i, j)| self.at(i, j))) {
                    count += 1;
                }
            }
        }
        count
    }
}
