use crate::Board;

/// Renders the cells as a framed block of digits, one row per line:
///
/// ```text
///  -----------------
///  | 0 0 0 0 0 0 0 |
///  ...
///  | 1 2 0 0 0 0 0 |
///  -----------------
/// ```
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, " -----------------")?;
        for row in self.grid().rows() {
            write!(f, " | ")?;
            for cell in row {
                write!(f, "{} ", cell)?;
            }
            writeln!(f, "|")?;
        }
        write!(f, " -----------------")
    }
}
