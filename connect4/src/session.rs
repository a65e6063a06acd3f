use serde::{Deserialize, Serialize};

use crate::Piece;

/// Which kind of player a side of the game is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerRole {
    Computer,
    Human,
}

/// How the program driving the board plays the game.
///
/// The board only stores this for its callers and never looks at it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    /// Human and computer take turns until the board is full.
    Interactive,
    /// The computer makes a single move and the program exits.
    OneMove,
}

/// The piece label each [`PlayerRole`] plays with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceAssignment {
    pub computer: Piece,
    pub human: Piece,
}

impl PieceAssignment {
    /// The side given by `first` makes the next move, so it plays
    /// `next_turn`, and the other side gets the other piece.
    pub fn new(first: PlayerRole, next_turn: Piece) -> Self {
        match first {
            PlayerRole::Computer => Self {
                computer: next_turn,
                human: next_turn.other(),
            },
            PlayerRole::Human => Self {
                computer: next_turn.other(),
                human: next_turn,
            },
        }
    }

    pub fn piece_of(&self, role: PlayerRole) -> Piece {
        match role {
            PlayerRole::Computer => self.computer,
            PlayerRole::Human => self.human,
        }
    }

    pub fn role_of(&self, piece: Piece) -> PlayerRole {
        if piece == self.computer {
            PlayerRole::Computer
        } else {
            PlayerRole::Human
        }
    }
}

impl std::fmt::Display for PieceAssignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Human plays as : {} , Computer plays as : {}",
            self.human, self.computer
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_mover_gets_next_piece() {
        let a = PieceAssignment::new(PlayerRole::Computer, Piece::One);
        assert_eq!((a.computer, a.human), (Piece::One, Piece::Two));
        let a = PieceAssignment::new(PlayerRole::Human, Piece::Two);
        assert_eq!((a.computer, a.human), (Piece::One, Piece::Two));
        let a = PieceAssignment::new(PlayerRole::Human, Piece::One);
        assert_eq!((a.computer, a.human), (Piece::Two, Piece::One));
        let a = PieceAssignment::new(PlayerRole::Computer, Piece::Two);
        assert_eq!((a.computer, a.human), (Piece::Two, Piece::One));
        assert_eq!(a.role_of(Piece::Two), PlayerRole::Computer);
        assert_eq!(a.piece_of(PlayerRole::Human), Piece::One);
    }
}
