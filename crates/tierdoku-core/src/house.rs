//! The 27 fixed constraint groups (houses).

use std::fmt::{self, Display};

use crate::Position;

/// A Sudoku house: a row, column, or 3×3 box.
///
/// The 27 houses are the complete constraint topology of the puzzle; each
/// must contain every digit 1-9 exactly once. Houses are derived once from
/// the coordinate math below and never change.
///
/// # Examples
///
/// ```
/// use tierdoku_core::{House, Position};
///
/// assert_eq!(House::ALL.len(), 27);
///
/// let house = House::box_of(Position::new(4, 4));
/// assert_eq!(house, House::Box { index: 4 });
/// assert!(house.contains(Position::new(3, 3)));
/// assert!(!house.contains(Position::new(0, 0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum House {
    /// A row identified by its row index (0-8).
    Row {
        /// Row index (0-8).
        r: u8,
    },
    /// A column identified by its column index (0-8).
    Column {
        /// Column index (0-8).
        c: u8,
    },
    /// A 3×3 box identified by its index (0-8, left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl House {
    /// All 27 houses, in row, column, box order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { r: 0 }; 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row { r: i as u8 };
            all[i + 9] = Self::Column { c: i as u8 };
            all[i + 18] = Self::Box { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Returns the row house containing the position.
    #[inline]
    #[must_use]
    pub const fn row_of(pos: Position) -> Self {
        Self::Row { r: pos.row() }
    }

    /// Returns the column house containing the position.
    #[inline]
    #[must_use]
    pub const fn column_of(pos: Position) -> Self {
        Self::Column { c: pos.col() }
    }

    /// Returns the box house containing the position.
    #[inline]
    #[must_use]
    pub const fn box_of(pos: Position) -> Self {
        Self::Box {
            index: pos.box_index(),
        }
    }

    /// Returns the 9 positions of this house, in house order.
    ///
    /// House order is left-to-right for rows, top-to-bottom for columns,
    /// and row-major within the box for boxes.
    #[must_use]
    pub fn positions(self) -> [Position; 9] {
        let mut positions = [Position::default(); 9];
        for (i, slot) in positions.iter_mut().enumerate() {
            #[expect(clippy::cast_possible_truncation)]
            let i = i as u8;
            *slot = match self {
                Self::Row { r } => Position::new(r, i),
                Self::Column { c } => Position::new(i, c),
                Self::Box { index } => Position::from_box(index, i),
            };
        }
        positions
    }

    /// Returns `true` if the house contains the position.
    #[inline]
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        match self {
            Self::Row { r } => pos.row() == r,
            Self::Column { c } => pos.col() == c,
            Self::Box { index } => pos.box_index() == index,
        }
    }
}

impl Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row { r } => write!(f, "row {r}"),
            Self::Column { c } => write!(f, "column {c}"),
            Self::Box { index } => write!(f, "box {index}"),
        }
    }
}
