use connect4::Board;
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use tracing::trace;

/// Something that decides which column to play next.
///
/// The search that a real computer player would run lives outside of this
/// crate; anything implementing this trait can be plugged in.
pub trait MovePicker {
    fn name(&self) -> &str;

    /// Returns `None` if there is nothing to play.
    fn pick_column(&mut self, board: &Board) -> Option<i8>;
}

/// Plays a uniformly random valid column.
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl MovePicker for RandomPicker {
    fn name(&self) -> &str {
        "random"
    }

    fn pick_column(&mut self, board: &Board) -> Option<i8> {
        let column = board.valid_moves().choose(&mut self.rng);
        trace!(?column, "Random pick");
        column
    }
}

/// Always plays the same column, e.g. one given on the command line.
///
/// The column is returned even when it is not a valid move, so the caller
/// gets to report it.
pub struct FixedColumn(pub i8);

impl MovePicker for FixedColumn {
    fn name(&self) -> &str {
        "fixed"
    }

    fn pick_column(&mut self, board: &Board) -> Option<i8> {
        if board.is_board_full() {
            None
        } else {
            Some(self.0)
        }
    }
}
