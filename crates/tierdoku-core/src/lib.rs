//! Core data structures for the tierdoku solver.
//!
//! This crate holds the pure, immutable vocabulary of 9×9 Sudoku:
//!
//! - [`digit`]: type-safe digits 1-9
//! - [`digit_set`]: a 9-bit set of digits with full set algebra
//! - [`position`]: `(row, col)` board coordinates
//! - [`house`]: the 27 fixed constraint groups (rows, columns, boxes)
//! - [`board`]: the 9×9 grid of `Option<Digit>` and its 81-character
//!   text form
//!
//! Everything here is a cheap value type; there is no solver logic and no
//! mutable shared state. The solver crate layers candidate bookkeeping on
//! top of these types.
//!
//! # Examples
//!
//! ```
//! use tierdoku_core::{Board, Digit, House, Position};
//!
//! let board: Board = "53..7....6..195....98....6.8...6...34..8.3..1\
//!                     7...2...6.6....28....419..5....8..79"
//!     .parse()?;
//! assert_eq!(board.get(Position::new(0, 0)), Some(Digit::D5));
//!
//! // Every position belongs to exactly three houses.
//! let pos = Position::new(4, 7);
//! assert_eq!(House::row_of(pos), House::Row { r: 4 });
//! # Ok::<(), tierdoku_core::ParseBoardError>(())
//! ```

pub mod board;
pub mod digit;
pub mod digit_set;
pub mod house;
pub mod position;

pub use self::{
    board::{Board, ParseBoardError},
    digit::Digit,
    digit_set::DigitSet,
    house::House,
    position::Position,
};
