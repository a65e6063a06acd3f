use serde::{Deserialize, Serialize};

/// The contents of a single cell of the grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Cell {
    #[default]
    Empty = 0,
    Player1 = 1,
    Player2 = 2,
}

/// A piece label, i.e. one of the two players.
///
/// Player one always moves first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Piece {
    #[serde(rename = "1")]
    One = 1,
    #[serde(rename = "2")]
    Two = 2,
}

impl Cell {
    /// Decodes the numeric cell value used by the persisted format.
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Cell::Empty),
            1 => Some(Cell::Player1),
            2 => Some(Cell::Player2),
            _ => None,
        }
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    /// Decodes a digit character such as `'1'`.
    pub fn from_digit(c: char) -> Option<Self> {
        u8::try_from(c)
            .ok()
            .and_then(|b| b.checked_sub(b'0'))
            .and_then(Self::from_value)
    }

    pub fn to_digit(self) -> char {
        char::from(b'0' + self.value())
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The piece occupying this cell, if any.
    pub fn piece(self) -> Option<Piece> {
        match self {
            Cell::Empty => None,
            Cell::Player1 => Some(Piece::One),
            Cell::Player2 => Some(Piece::Two),
        }
    }
}

impl Piece {
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Piece::One),
            2 => Some(Piece::Two),
            _ => None,
        }
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn other(self) -> Self {
        match self {
            Piece::One => Piece::Two,
            Piece::Two => Piece::One,
        }
    }

    pub fn to_digit(self) -> char {
        Cell::from(self).to_digit()
    }
}

impl From<Piece> for Cell {
    fn from(piece: Piece) -> Cell {
        match piece {
            Piece::One => Cell::Player1,
            Piece::Two => Cell::Player2,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_digit())
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_digit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits() {
        assert_eq!(Cell::from_digit('0'), Some(Cell::Empty));
        assert_eq!(Cell::from_digit('2'), Some(Cell::Player2));
        assert_eq!(Cell::from_digit('3'), None);
        // Below '0' in ASCII
        assert_eq!(Cell::from_digit('/'), None);
        assert_eq!(Cell::from_digit('é'), None);
        assert_eq!(Cell::Player1.to_digit(), '1');
        assert_eq!(Piece::Two.to_digit(), '2');
    }

    #[test]
    fn pieces() {
        assert_eq!(Piece::One.other(), Piece::Two);
        assert_eq!(Cell::from(Piece::Two).piece(), Some(Piece::Two));
        assert_eq!(Cell::Empty.piece(), None);
        assert_eq!(Piece::from_value(0), None);
    }
}
