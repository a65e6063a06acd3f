/// The error type for a move picked by a [`MovePicker`](crate::MovePicker)
/// that cannot be played.
#[derive(Debug, PartialEq, Eq)]
pub enum IllegalMove {
    /// The board still had room, but no column was picked.
    NoColumnPicked,
    /// The picked column is out of range or full.
    InvalidColumn { column: i8 },
}

impl std::error::Error for IllegalMove {}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::NoColumnPicked => {
                write!(f, "No column was picked, but the board is not full")
            }
            IllegalMove::InvalidColumn { column } => write!(
                f,
                "Column {} cannot be played, it is either full or not between 0 and {}",
                column,
                connect4::COLUMNS - 1
            ),
        }
    }
}

/// The messages of an error and of each error in its `source()` chain,
/// outermost first.
pub fn error_messages(err: &(dyn std::error::Error + 'static)) -> Vec<String> {
    let mut messages = Vec::new();
    let mut err_dyn = err;
    while let Some(src_err) = err_dyn.source() {
        messages.push(err_dyn.to_string());
        err_dyn = src_err;
    }
    messages.push(err_dyn.to_string());
    messages
}
