//! Drives the [`connect4`] board engine from the command line.
mod error;
mod game;
mod player;
mod report;
pub use error::*;
pub use game::*;
pub use player::*;
pub use report::*;
