//! The board engine for Connect Four on a 6x7 grid.
//!
//! A [`Board`] is meant to be driven by a game-tree search: apply a move,
//! score the position with [`Board::count_completed_lines()`] and
//! [`Board::count_open_threes()`], then undo the move. Boards can be saved
//! and restored with [`save_board()`] and [`load_board()`].
pub use board::*;
pub use cell::*;
pub use errors::*;
pub use persistence::*;
pub use session::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod cell;
mod errors;
mod persistence;
mod session;
mod visualization;
