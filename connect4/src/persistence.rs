//! The text format for saving and restoring a game in progress.
//!
//! A board is stored as six lines of seven digits (`0` for an empty cell,
//! `1` and `2` for pieces), top row first, followed by a line holding the
//! piece that moves next. Lines end with `\r\n`.
//!
//! ```text
//! 0000000
//! 0000000
//! 0000000
//! 0000000
//! 0000000
//! 0000000
//! 1
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use crate::{
    Board, Cell, Grid, LoadError, Piece, SaveError, ValidationError, COLUMNS, ROWS,
};

const LINE_ENDING: &str = "\r\n";

impl Board {
    /// Reads a board in the persisted format.
    ///
    /// The input is read as bytes, so anything that is not an ASCII digit
    /// (including bytes that aren't valid UTF-8) is rejected as an invalid
    /// cell rather than as a read error. Bytes past the seventh on a board
    /// line are ignored, as is anything after the first byte of the
    /// next-turn line and anything after that line.
    pub fn from_reader(reader: impl BufRead) -> Result<Board, LoadError> {
        let mut lines = reader.split(b'\n');
        let mut cells = [[Cell::Empty; COLUMNS as usize]; ROWS as usize];

        for (row, row_cells) in cells.iter_mut().enumerate() {
            let line_no = row + 1;
            let line = lines
                .next()
                .ok_or(ValidationError::MissingLine { line: line_no })??;
            let line = strip_cr(&line);
            if line.len() < COLUMNS as usize {
                return Err(ValidationError::ShortLine {
                    line: line_no,
                    len: line.len(),
                }
                .into());
            }
            for (col, (cell, &byte)) in row_cells.iter_mut().zip(line).enumerate() {
                let value = decode_digit(byte);
                *cell = u8::try_from(value)
                    .ok()
                    .and_then(Cell::from_value)
                    .ok_or(ValidationError::InvalidCell { row, col, value })?;
            }
        }

        let turn_line_no = ROWS as usize + 1;
        let line = lines
            .next()
            .ok_or(ValidationError::MissingLine { line: turn_line_no })??;
        let declared = strip_cr(&line)
            .first()
            .ok_or(ValidationError::ShortLine {
                line: turn_line_no,
                len: 0,
            })
            .map(|&byte| decode_digit(byte))?;
        let declared = u8::try_from(declared)
            .ok()
            .and_then(Piece::from_value)
            .ok_or(ValidationError::InvalidTurn { value: declared })?;

        let board = Board::from_grid(&Grid::from_cells(cells));
        if board.current_turn() != declared {
            return Err(ValidationError::TurnMismatch {
                declared: declared.value(),
                derived: board.current_turn().value(),
            }
            .into());
        }
        Ok(board)
    }

    /// Writes the board in the persisted format.
    pub fn write_to(&self, mut writer: impl Write) -> std::io::Result<()> {
        writer.write_all(self.to_persisted_string().as_bytes())
    }

    pub fn to_persisted_string(&self) -> String {
        let mut s = String::with_capacity((COLUMNS as usize + 2) * (ROWS as usize) + 3);
        for row in self.grid().rows() {
            s.extend(row.iter().map(|cell| cell.to_digit()));
            s.push_str(LINE_ENDING);
        }
        s.push(self.current_turn().to_digit());
        s.push_str(LINE_ENDING);
        s
    }
}

impl FromStr for Board {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_reader(s.as_bytes())
    }
}

/// Reads a board from a file.
pub fn load_board(path: impl AsRef<Path>) -> Result<Board, LoadError> {
    let file = File::open(path)?;
    Board::from_reader(BufReader::new(file))
}

/// Writes a board to a file, replacing its contents.
pub fn save_board(board: &Board, path: impl AsRef<Path>) -> Result<(), SaveError> {
    let path = path.as_ref();
    let to_save_error = |err| SaveError {
        path: path.to_path_buf(),
        err,
    };
    let mut writer = BufWriter::new(File::create(path).map_err(to_save_error)?);
    board.write_to(&mut writer).map_err(to_save_error)?;
    writer.flush().map_err(to_save_error)
}

// The numeric value of a digit byte, which is out of range for
// anything that isn't a digit
fn decode_digit(byte: u8) -> i32 {
    i32::from(byte) - i32::from(b'0')
}

// split() keeps the '\r' of a "\r\n" line ending
fn strip_cr(line: &[u8]) -> &[u8] {
    line.strip_suffix(b"\r").unwrap_or(line)
}
