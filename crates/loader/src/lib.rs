//! Loads Funge program text into an initial program space.
//!
//! One cell is written per source character at its (column, row)
//! position. Rows are separated by `\n`; carriage returns and form
//! feeds are dropped. Spaces are written like any other character, so
//! each row's length determines the bounding extent the wrap rule sees.

use funge_common::{Cell, Vector};
use funge_space::ProgramSpace;
use thiserror::Error;

/// Errors from loading program text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The source contained no cells at all. An empty space has no
    /// bounding rectangle, which would send the initial IP on an
    /// endless walk over blanks.
    #[error("program text contains no cells")]
    EmptyProgram,
}

/// Parse program text into a populated space.
///
/// The returned space is always well-formed and bounded: the initial
/// IP at the origin has something to execute (even if only a blank).
pub fn load(text: &str) -> Result<ProgramSpace, LoadError> {
    let mut space = ProgramSpace::new();

    for (row, line) in text.split('\n').enumerate() {
        let mut col = 0i64;
        for ch in line.chars() {
            if ch == '\r' || ch == '\u{c}' {
                continue;
            }
            space.write(Vector::new(col, row as i64), Cell::from_char(ch));
            col += 1;
        }
    }

    if space.is_empty() {
        return Err(LoadError::EmptyProgram);
    }
    Ok(space)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_row_program() {
        let space = load("12+,@").unwrap();
        let bounds = space.bounds().unwrap();
        assert_eq!(bounds.width(), 5);
        assert_eq!(bounds.height(), 1);
        assert_eq!(space.read(Vector::ORIGIN), Cell::from_char('1'));
        assert_eq!(space.read(Vector::new(4, 0)), Cell::from_char('@'));
    }

    #[test]
    fn rows_are_stacked_downward() {
        let space = load("ab\ncd").unwrap();
        assert_eq!(space.read(Vector::new(0, 1)), Cell::from_char('c'));
        assert_eq!(space.read(Vector::new(1, 1)), Cell::from_char('d'));
        assert_eq!(space.bounds().unwrap().height(), 2);
    }

    #[test]
    fn spaces_are_written_and_extend_rows() {
        let space = load("a   b").unwrap();
        assert_eq!(space.bounds().unwrap().width(), 5);
        assert_eq!(space.read(Vector::new(2, 0)), Cell::BLANK);
    }

    #[test]
    fn ragged_rows_keep_their_own_lengths() {
        let space = load("abcdef\nxy").unwrap();
        let bounds = space.bounds().unwrap();
        assert_eq!(bounds.width(), 6);
        assert_eq!(bounds.height(), 2);
        // The short row's tail was never written and reads blank.
        assert_eq!(space.read(Vector::new(4, 1)), Cell::BLANK);
    }

    #[test]
    fn carriage_returns_are_dropped() {
        let space = load("ab\r\ncd\r\n").unwrap();
        assert_eq!(space.bounds().unwrap().width(), 2);
        assert_eq!(space.read(Vector::new(1, 0)), Cell::from_char('b'));
        assert_eq!(space.read(Vector::new(0, 1)), Cell::from_char('c'));
    }

    #[test]
    fn form_feeds_are_dropped() {
        let space = load("a\u{c}b").unwrap();
        assert_eq!(space.bounds().unwrap().width(), 2);
        assert_eq!(space.read(Vector::new(1, 0)), Cell::from_char('b'));
    }

    #[test]
    fn trailing_newline_adds_no_row() {
        let space = load("@\n").unwrap();
        assert_eq!(space.bounds().unwrap().height(), 1);
    }

    #[test]
    fn empty_text_is_an_error() {
        assert_eq!(load("").unwrap_err(), LoadError::EmptyProgram);
        assert_eq!(load("\n\n\r\n").unwrap_err(), LoadError::EmptyProgram);
    }
}
