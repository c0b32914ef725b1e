//! Program-space cells.

/// One addressable unit of program space: a single character code.
///
/// Funge programs are character grids, but the machine manipulates
/// code-point integers uniformly with data, so the payload is a full
/// `i64`. Unwritten space reads as [`Cell::BLANK`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell(pub i64);

impl Cell {
    /// The default contents of unwritten space: the space character.
    pub const BLANK: Cell = Cell(' ' as i64);

    /// The raw character code.
    pub const fn value(self) -> i64 {
        self.0
    }

    pub const fn from_char(ch: char) -> Self {
        Cell(ch as i64)
    }

    /// The cell as a character, if it holds a valid scalar value.
    pub fn to_char(self) -> Option<char> {
        u32::try_from(self.0).ok().and_then(char::from_u32)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::BLANK
    }
}

impl From<char> for Cell {
    fn from(ch: char) -> Self {
        Cell::from_char(ch)
    }
}
