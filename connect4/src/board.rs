mod error;
mod grid;
mod lines;

pub use error::*;
pub use grid::*;
pub use lines::*;

use crate::{Cell, FirstTurnAlreadyAssigned, GameMode, Piece, PieceAssignment, PlayerRole};

pub const ROWS: i8 = 6;
pub const COLUMNS: i8 = 7;
pub const MAX_PIECE_COUNT: usize = ROWS as usize * COLUMNS as usize;

/// A Connect Four board.
///
/// Pieces are only ever added and removed through [`Self::apply_move()`] and
/// [`Self::undo_move()`], which keeps the piece count in sync with the grid.
/// Whose turn it is follows from the piece count alone.
///
/// Cloning a board copies the grid, so a search can explore a clone without
/// touching the original.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    /// Always equal to the number of non-empty cells in `grid`.
    piece_count: usize,
    first_turn: Option<PlayerRole>,
    /// Derived from `first_turn` when it is set.
    piece_assignment: Option<PieceAssignment>,
    mode: Option<GameMode>,
}

impl Board {
    /// Creates an empty board. Player one moves first.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board holding a copy of the given cells.
    ///
    /// The session metadata (first turn, mode) is not copied.
    pub fn from_grid(grid: &Grid) -> Self {
        Self {
            grid: *grid,
            piece_count: grid.count_pieces(),
            ..Self::default()
        }
    }

    /// A read-only view of the cells.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn get(&self, row: i8, col: i8) -> Result<Cell, OutOfBounds> {
        self.grid.get(row, col)
    }

    pub fn piece_count(&self) -> usize {
        self.piece_count
    }

    /// The piece that is played by the next call to [`Self::apply_move()`].
    pub fn current_turn(&self) -> Piece {
        if self.piece_count % 2 == 0 {
            Piece::One
        } else {
            Piece::Two
        }
    }

    /// A move is valid if the column exists and its top cell is empty.
    pub fn is_valid_move(&self, column: i8) -> bool {
        matches!(self.grid.get(0, column), Ok(Cell::Empty))
    }

    /// The columns that a piece can currently be dropped into.
    pub fn valid_moves(&self) -> impl Iterator<Item = i8> + '_ {
        (0..COLUMNS).filter(|&col| self.is_valid_move(col))
    }

    /// Drops the current player's piece into `column`.
    ///
    /// Returns `false` without changing anything if the move is not valid.
    pub fn apply_move(&mut self, column: i8) -> bool {
        if !self.is_valid_move(column) {
            return false;
        }
        let cell = Cell::from(self.current_turn());
        // Since the top cell is empty, there is an empty cell in this column
        for row in (0..ROWS).rev() {
            if let Ok(Cell::Empty) = self.grid.get(row, column) {
                if self.grid.set(row, column, cell).is_ok() {
                    self.piece_count += 1;
                    return true;
                }
            }
        }
        false
    }

    /// Removes the topmost piece from `column`.
    ///
    /// This is meant for undoing the last move played in that column. It does
    /// nothing if the column is empty or does not exist.
    pub fn undo_move(&mut self, column: i8) {
        for row in 0..ROWS {
            match self.grid.get(row, column) {
                Ok(Cell::Empty) => continue,
                Ok(_) => {
                    if self.grid.set(row, column, Cell::Empty).is_ok() {
                        self.piece_count -= 1;
                    }
                    return;
                }
                Err(_) => return,
            }
        }
    }

    pub fn is_board_full(&self) -> bool {
        self.piece_count >= MAX_PIECE_COUNT
    }

    /// See [`Grid::count_completed_lines()`].
    pub fn count_completed_lines(&self, piece: Piece) -> u32 {
        self.grid.count_completed_lines(piece)
    }

    /// See [`Grid::count_open_threes()`].
    pub fn count_open_threes(&self, piece: Piece) -> u32 {
        self.grid.count_open_threes(piece)
    }

    /// The number of completed lines of player one and player two.
    pub fn scores(&self) -> (u32, u32) {
        (
            self.count_completed_lines(Piece::One),
            self.count_completed_lines(Piece::Two),
        )
    }

    /// Decides which side moves next, which fixes the pieces each side plays.
    ///
    /// This can only be done once per board.
    pub fn assign_first_turn(
        &mut self,
        role: PlayerRole,
    ) -> Result<PieceAssignment, FirstTurnAlreadyAssigned> {
        if let Some(existing) = self.first_turn {
            return Err(FirstTurnAlreadyAssigned { existing });
        }
        let assignment = PieceAssignment::new(role, self.current_turn());
        self.first_turn = Some(role);
        self.piece_assignment = Some(assignment);
        Ok(assignment)
    }

    pub fn first_turn(&self) -> Option<PlayerRole> {
        self.first_turn
    }

    pub fn piece_assignment(&self) -> Option<PieceAssignment> {
        self.piece_assignment
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = Some(mode);
    }

    pub fn mode(&self) -> Option<GameMode> {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;
    use rand::rngs::StdRng;
    use rand::seq::IteratorRandom;
    use rand::SeedableRng;

    use super::*;
    use crate::arbitrary::MoveSequence;

    quickcheck! {
        fn turn_follows_parity(moves: MoveSequence) -> bool {
            let mut board = Board::new();
            let mut good = true;
            for (column, undo) in moves.0 {
                if undo {
                    board.undo_move(column);
                } else {
                    board.apply_move(column);
                }
                good &= board.current_turn().value() as usize == board.piece_count() % 2 + 1;
                good &= board.piece_count() == board.grid().count_pieces();
            }
            good
        }
    }

    quickcheck! {
        fn apply_then_undo_restores(moves: MoveSequence, column: i8) -> bool {
            let mut board = Board::new();
            for (col, _) in moves.0 {
                board.apply_move(col);
            }
            let before = board.clone();
            if board.apply_move(column) {
                board.undo_move(column);
            }
            board == before
        }
    }

    quickcheck! {
        fn validity_matches_top_cell(moves: MoveSequence, column: i8) -> bool {
            let mut board = Board::new();
            for (col, _) in moves.0 {
                board.apply_move(col);
            }
            let expected = (0..COLUMNS).contains(&column)
                && board.get(0, column) == Ok(Cell::Empty);
            board.is_valid_move(column) == expected
        }
    }

    #[test]
    fn drop_stacks_from_the_bottom() {
        let mut board = Board::new();
        assert!(board.apply_move(3));
        assert!(board.apply_move(3));
        assert_eq!(board.get(5, 3), Ok(Cell::Player1));
        assert_eq!(board.get(4, 3), Ok(Cell::Player2));
        assert_eq!(board.get(3, 3), Ok(Cell::Empty));
        assert_eq!(board.piece_count(), 2);
        assert_eq!(board.current_turn(), Piece::One);
    }

    #[test]
    fn out_of_range_columns() {
        let mut board = Board::new();
        for column in [-1, 7, 8, i8::MIN, i8::MAX] {
            assert!(!board.is_valid_move(column));
            assert!(!board.apply_move(column));
        }
        assert_eq!(board, Board::new());
    }

    #[test]
    fn full_column() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            assert!(board.apply_move(0));
        }
        assert!(!board.is_valid_move(0));
        let before = board.clone();
        assert!(!board.apply_move(0));
        assert_eq!(board, before);
        assert_eq!(board.valid_moves().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn undo_empty_column_is_noop() {
        let mut board = Board::new();
        board.apply_move(2);
        let before = board.clone();
        board.undo_move(4);
        board.undo_move(-1);
        board.undo_move(7);
        assert_eq!(board, before);
    }

    #[test]
    fn fill_the_board() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut board = Board::new();
        for _ in 0..MAX_PIECE_COUNT {
            assert!(!board.is_board_full());
            let column = board.valid_moves().choose(&mut rng).unwrap();
            assert!(board.apply_move(column));
        }
        assert!(board.is_board_full());
        assert_eq!(board.valid_moves().count(), 0);
        assert_eq!(board.grid().count_pieces(), MAX_PIECE_COUNT);
    }

    #[test]
    fn bottom_row_scores() {
        let mut board = Board::new();
        // Player one builds columns 0..=3, player two stacks on top
        for column in [0, 0, 1, 1, 2, 2, 3] {
            assert!(board.apply_move(column));
        }
        assert_eq!(board.count_completed_lines(Piece::One), 1);
        assert_eq!(board.count_completed_lines(Piece::Two), 0);
        assert_eq!(board.count_open_threes(Piece::Two), 1);
        assert_eq!(board.scores(), (1, 0));
    }

    #[test]
    fn copy_is_independent() {
        let mut board = Board::new();
        for column in [3, 3, 4] {
            board.apply_move(column);
        }
        let mut copy = Board::from_grid(board.grid());
        assert_eq!(copy.piece_count(), 3);
        assert_eq!(copy.current_turn(), Piece::Two);
        copy.apply_move(5);
        assert_eq!(board.piece_count(), 3);
        assert_eq!(board.get(5, 5), Ok(Cell::Empty));
    }

    #[test]
    fn first_turn_only_once() {
        let mut board = Board::new();
        assert_eq!(board.first_turn(), None);
        let assignment = board.assign_first_turn(PlayerRole::Human).unwrap();
        assert_eq!(assignment.human, Piece::One);
        assert_eq!(board.piece_assignment(), Some(assignment));
        assert_eq!(
            board.assign_first_turn(PlayerRole::Computer),
            Err(FirstTurnAlreadyAssigned {
                existing: PlayerRole::Human
            })
        );
        // Playing doesn't change who plays which piece
        board.apply_move(0);
        assert_eq!(board.piece_assignment(), Some(assignment));
    }

    #[test]
    fn mode_is_stored() {
        let mut board = Board::new();
        assert_eq!(board.mode(), None);
        board.set_mode(GameMode::OneMove);
        assert_eq!(board.mode(), Some(GameMode::OneMove));
    }
}
