//! The 9×9 puzzle grid and its 81-character text form.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use derive_more::{Display, Error};

use crate::{Digit, Position};

/// A 9×9 Sudoku grid.
///
/// Each cell is either empty (`None`) or holds a [`Digit`]. The board is a
/// plain `Copy` value; cloning it is an array copy, which is what makes
/// snapshot-based speculation in the solver cheap.
///
/// The canonical text form is the 81-character row-major digit string with
/// `'0'` marking empty cells. Parsing additionally accepts `'.'` and `'_'`
/// for empty cells and ignores whitespace, so grids can be written out over
/// multiple lines in tests.
///
/// # Examples
///
/// ```
/// use tierdoku_core::{Board, Digit, Position};
///
/// let mut board = Board::EMPTY;
/// board.set(Position::new(0, 0), Some(Digit::D5));
/// assert_eq!(board.to_string().chars().next(), Some('5'));
/// assert_eq!(board.empty_count(), 80);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Digit>; 81],
}

/// Error parsing a board from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// The text did not contain exactly 81 cells.
    #[display("puzzle text has {len} cells, expected 81")]
    BadLength {
        /// Number of non-whitespace characters found.
        len: usize,
    },
    /// A cell character was not a digit or an empty-cell marker.
    #[display("invalid character {c:?} at cell {index}")]
    BadCharacter {
        /// The offending character.
        c: char,
        /// Row-major cell index of the character.
        index: usize,
    },
}

impl Board {
    /// The board with all 81 cells empty.
    pub const EMPTY: Self = Self { cells: [None; 81] };

    /// Returns the cell value at a position.
    #[inline]
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.cell_index()]
    }

    /// Sets the cell value at a position.
    #[inline]
    pub const fn set(&mut self, pos: Position, value: Option<Digit>) {
        self.cells[pos.cell_index()] = value;
    }

    /// Returns `true` if the cell at the position is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Returns `true` if every cell holds a digit.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns an iterator over the empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> {
        Position::ALL
            .into_iter()
            .filter(|pos| self.is_empty_at(*pos))
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, ParseBoardError> {
        let mut cells = [None; 81];
        let mut index = 0;
        for c in s.chars().filter(|c| !c.is_whitespace()) {
            if index >= 81 {
                // Keep counting for the error message.
                index += 1;
                continue;
            }
            cells[index] = match c {
                '0' | '.' | '_' => None,
                _ => match Digit::from_char(c) {
                    Some(digit) => Some(digit),
                    None => return Err(ParseBoardError::BadCharacter { c, index }),
                },
            };
            index += 1;
        }
        if index != 81 {
            return Err(ParseBoardError::BadLength { len: index });
        }
        Ok(Self { cells })
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            let c = cell.map_or('0', Digit::to_char);
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASSIC: &str =
        "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";

    #[test]
    fn test_parse_classic() {
        let board: Board = CLASSIC.parse().unwrap();
        assert_eq!(board.get(Position::new(0, 0)), Some(Digit::D5));
        assert_eq!(board.get(Position::new(0, 2)), None);
        assert_eq!(board.get(Position::new(8, 8)), Some(Digit::D9));
        assert_eq!(board.empty_count(), 51);
    }

    #[test]
    fn test_display_round_trip() {
        let board: Board = CLASSIC.parse().unwrap();
        let canonical = board.to_string();
        assert_eq!(canonical.len(), 81);
        assert_eq!(canonical, CLASSIC.replace('.', "0"));
        assert_eq!(canonical.parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_parse_multiline_with_underscores() {
        let board: Board = "
            53_ _7_ ___
            6__ 195 ___
            _98 ___ _6_
            8__ _6_ __3
            4__ 8_3 __1
            7__ _2_ __6
            _6_ ___ 28_
            ___ 419 __5
            ___ _8_ _79
        "
        .parse()
        .unwrap();
        assert_eq!(board, CLASSIC.parse().unwrap());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "123".parse::<Board>(),
            Err(ParseBoardError::BadLength { len: 3 })
        );
        assert_eq!(
            format!("{CLASSIC}0").parse::<Board>(),
            Err(ParseBoardError::BadLength { len: 82 })
        );
        let bad = CLASSIC.replace('7', "x");
        assert!(matches!(
            bad.parse::<Board>(),
            Err(ParseBoardError::BadCharacter { c: 'x', .. })
        ));
    }

    #[test]
    fn test_empty_positions() {
        let mut board = Board::EMPTY;
        board.set(Position::new(0, 0), Some(Digit::D1));
        board.set(Position::new(8, 8), Some(Digit::D9));
        let empty: Vec<_> = board.empty_positions().collect();
        assert_eq!(empty.len(), 79);
        assert!(!empty.contains(&Position::new(0, 0)));
        assert!(!empty.contains(&Position::new(8, 8)));
    }
}
