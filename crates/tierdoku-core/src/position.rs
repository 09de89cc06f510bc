//! Board coordinates.

use std::fmt::{self, Display};

/// A board coordinate: `(row, col)`, each in 0-8.
///
/// Rows run top to bottom, columns left to right. Cell indices (0-80) are
/// row-major, matching the 81-character puzzle text form.
///
/// # Examples
///
/// ```
/// use tierdoku_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.cell_index(), 43);
/// assert_eq!(pos.box_index(), 5);
/// assert_eq!(Position::from_cell_index(43), pos);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// All 81 positions in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { row: 0, col: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                row: (i / 9) as u8,
                col: (i % 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[inline]
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9);
        Self { row, col }
    }

    /// Creates a position from a row-major cell index (0-80).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[inline]
    #[must_use]
    pub const fn from_cell_index(index: usize) -> Self {
        assert!(index < 81);
        #[expect(clippy::cast_possible_truncation)]
        Self {
            row: (index / 9) as u8,
            col: (index % 9) as u8,
        }
    }

    /// Creates a position from a box index (0-8) and a cell index within
    /// the box (0-8, row-major inside the box).
    ///
    /// # Panics
    ///
    /// Panics if either index is not in the range 0-8.
    #[inline]
    #[must_use]
    pub const fn from_box(box_index: u8, box_cell: u8) -> Self {
        assert!(box_index < 9 && box_cell < 9);
        Self {
            row: (box_index / 3) * 3 + box_cell / 3,
            col: (box_index % 3) * 3 + box_cell % 3,
        }
    }

    /// Returns the row index (0-8).
    #[inline]
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column index (0-8).
    #[inline]
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the row-major cell index (0-80).
    #[inline]
    #[must_use]
    pub const fn cell_index(self) -> usize {
        self.row as usize * 9 + self.col as usize
    }

    /// Returns the index (0-8) of the 3×3 box containing this position.
    #[inline]
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.row / 3) * 3 + self.col / 3
    }

    /// Returns the row-major index (0-8) of this position within its box.
    #[inline]
    #[must_use]
    pub const fn box_cell_index(self) -> u8 {
        (self.row % 3) * 3 + self.col % 3
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
