use std::path::Path;

use anyhow::Context;
use connect4::{load_board, save_board, Board, GameMode, Piece, PlayerRole};
use tracing::{debug, info, warn};

use crate::error::IllegalMove;
use crate::player::MovePicker;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Played { column: i8, piece: Piece },
    /// Nothing was played because there was no room left.
    BoardFull,
}

/// Lets the picker choose a column and plays it.
pub fn play_one_move(
    board: &mut Board,
    picker: &mut dyn MovePicker,
) -> Result<MoveOutcome, IllegalMove> {
    if board.is_board_full() {
        return Ok(MoveOutcome::BoardFull);
    }
    let piece = board.current_turn();
    let column = picker
        .pick_column(board)
        .ok_or(IllegalMove::NoColumnPicked)?;
    if !board.apply_move(column) {
        return Err(IllegalMove::InvalidColumn { column });
    }
    let role = board.piece_assignment().map(|a| a.role_of(piece));
    info!(picker = picker.name(), column, %piece, ?role, "Played a piece");
    Ok(MoveOutcome::Played { column, piece })
}

/// Loads a board, plays a single move on it and saves the result.
///
/// When the board is already full, nothing is played and the output file is
/// not written.
pub fn run_one_move(
    input: &Path,
    output: &Path,
    first_turn: PlayerRole,
    picker: &mut dyn MovePicker,
) -> anyhow::Result<(Board, MoveOutcome)> {
    let mut board = load_board(input)
        .with_context(|| format!("Could not load the board from '{}'", input.display()))?;
    board.set_mode(GameMode::OneMove);
    let assignment = board.assign_first_turn(first_turn)?;
    info!(%assignment);
    debug!("Starting board:\n{}", board);

    let outcome = play_one_move(&mut board, picker)?;
    match outcome {
        MoveOutcome::Played { .. } => {
            save_board(&board, output)?;
            debug!(output = %output.display(), "Saved the board");
        }
        MoveOutcome::BoardFull => {
            warn!("The board is full, no move was played");
        }
    }
    Ok((board, outcome))
}
