use quickcheck::{Arbitrary, Gen};

use crate::COLUMNS;

/// A list of moves to play on an empty board, for property tests.
///
/// Each entry is a column plus a flag saying whether the move should be
/// undone instead of applied. Columns are mostly in range, but sometimes
/// one or two off, so invalid moves are exercised as well.
#[derive(Clone, Debug)]
pub struct MoveSequence(pub Vec<(i8, bool)>);

impl Arbitrary for MoveSequence {
    fn arbitrary(g: &mut Gen) -> Self {
        // Long enough to fill columns up now and then
        let len = usize::arbitrary(g) % 60;
        let moves = (0..len)
            .map(|_| {
                let column = (u8::arbitrary(g) % (COLUMNS as u8 + 4)) as i8 - 2;
                // Mostly drops, otherwise the board stays nearly empty
                let undo = u8::arbitrary(g) % 4 == 0;
                (column, undo)
            })
            .collect();
        MoveSequence(moves)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(MoveSequence))
    }
}
