use std::path::PathBuf;

use crate::PlayerRole;

/// The persisted board text is malformed.
#[derive(Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// A cell character did not decode to 0, 1 or 2.
    InvalidCell { row: usize, col: usize, value: i32 },
    /// The next-turn character did not decode to 1 or 2.
    InvalidTurn { value: i32 },
    /// The declared next turn does not follow from the number of pieces.
    TurnMismatch { declared: u8, derived: u8 },
    /// The input ended before the given (1-based) line.
    MissingLine { line: usize },
    /// A line has fewer characters than needed, i.e. seven for a board row
    /// and one for the next-turn line.
    ShortLine { line: usize, len: usize },
}

impl std::error::Error for ValidationError {}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidCell { row, col, value } => write!(
                f,
                "The piece read at row {}, column {} was {}, not a 1, a 2 or a 0",
                row, col, value
            ),
            ValidationError::InvalidTurn { value } => {
                write!(f, "The current turn read was {}, not a 1 or a 2", value)
            }
            ValidationError::TurnMismatch { declared, derived } => write!(
                f,
                "The current turn read ({}) does not correspond to the number of pieces played (expected {})",
                declared, derived
            ),
            ValidationError::MissingLine { line } => {
                write!(f, "The input ended before line {}", line)
            }
            ValidationError::ShortLine { line, len } => {
                write!(f, "Line {} is too short ({} characters)", line, len)
            }
        }
    }
}

/// The error type for loading a persisted board.
#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Validation(ValidationError),
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(err) => Some(err),
            LoadError::Validation(err) => Some(err),
        }
    }
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(_) => write!(f, "Problem reading the input"),
            LoadError::Validation(_) => write!(f, "The input is not a valid board"),
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<ValidationError> for LoadError {
    fn from(err: ValidationError) -> Self {
        LoadError::Validation(err)
    }
}

/// The error type for writing a board to a file.
#[derive(Debug)]
pub struct SaveError {
    pub path: PathBuf,
    pub err: std::io::Error,
}

impl std::error::Error for SaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.err)
    }
}

impl std::fmt::Display for SaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Problem writing to the output file '{}'", self.path.display())
    }
}

/// The first turn of a game can only be decided once.
#[derive(Debug, PartialEq, Eq)]
pub struct FirstTurnAlreadyAssigned {
    pub existing: PlayerRole,
}

impl std::error::Error for FirstTurnAlreadyAssigned {}

impl std::fmt::Display for FirstTurnAlreadyAssigned {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "The first turn was already given to the {:?} player",
            self.existing
        )
    }
}
