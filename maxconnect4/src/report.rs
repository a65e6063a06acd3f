use connect4::{Board, GameMode, Piece, PieceAssignment, PlayerRole};
use serde::{Deserialize, Serialize};

/// A summary of a board, for printing or as JSON.
///
/// The [`Display`](std::fmt::Display) form only contains the numbers, print
/// the [`Board`] itself for the cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardReport {
    /// The rows from top to bottom, as digits.
    pub rows: Vec<String>,
    pub next_turn: Piece,
    pub piece_count: usize,
    pub full: bool,
    pub scores: PlayerCounts,
    pub open_threes: PlayerCounts,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub first_turn: Option<PlayerRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub piece_assignment: Option<PieceAssignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub mode: Option<GameMode>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerCounts {
    pub player_1: u32,
    pub player_2: u32,
}

impl PlayerCounts {
    fn count(f: impl Fn(Piece) -> u32) -> Self {
        Self {
            player_1: f(Piece::One),
            player_2: f(Piece::Two),
        }
    }
}

impl BoardReport {
    pub fn new(board: &Board) -> Self {
        Self {
            rows: board
                .grid()
                .rows()
                .map(|row| row.iter().map(|cell| cell.to_digit()).collect())
                .collect(),
            next_turn: board.current_turn(),
            piece_count: board.piece_count(),
            full: board.is_board_full(),
            scores: PlayerCounts::count(|piece| board.count_completed_lines(piece)),
            open_threes: PlayerCounts::count(|piece| board.count_open_threes(piece)),
            first_turn: board.first_turn(),
            piece_assignment: board.piece_assignment(),
            mode: board.mode(),
        }
    }
}

impl std::fmt::Display for BoardReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Scores:\n   Player 1 = {}, Player 2 = {}",
            self.scores.player_1, self.scores.player_2
        )?;
        writeln!(
            f,
            "Open threes:\n   Player 1 = {}, Player 2 = {}",
            self.open_threes.player_1, self.open_threes.player_2
        )?;
        if let Some(assignment) = self.piece_assignment {
            writeln!(f, "{}", assignment)?;
        }
        if self.full {
            write!(f, "The board is full")
        } else {
            write!(f, "Player {} moves next", self.next_turn)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_counts() {
        let mut board = Board::new();
        for column in [0, 6, 1, 6, 2] {
            board.apply_move(column);
        }
        let report = BoardReport::new(&board);
        assert_eq!(report.rows[5], "1110002");
        assert_eq!(report.next_turn, Piece::Two);
        assert_eq!(report.piece_count, 5);
        assert_eq!(
            report.open_threes,
            PlayerCounts {
                player_1: 1,
                player_2: 0
            }
        );
        assert_eq!(report.scores.player_1, 0);
        assert!(report.to_string().ends_with("Player 2 moves next"));
    }

    #[test]
    fn json_omits_unset_session_fields() {
        let report = BoardReport::new(&Board::new());
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"next_turn\":\"1\""));
        assert!(!json.contains("first_turn"));
        assert_eq!(serde_json::from_str::<BoardReport>(&json).unwrap(), report);
    }
}
