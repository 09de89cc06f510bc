//! Solved-board verification.

use tierdoku_core::{Board, DigitSet, House};

/// Returns `true` if the board is completely and correctly solved.
///
/// Every one of the 27 houses must contain every digit 1-9. Since a house
/// has exactly 9 cells, containing all nine digits implies containing each
/// exactly once; a missing or duplicated digit both surface as some digit
/// being absent.
///
/// This is both the solver's success criterion and the driver's loop-exit
/// condition.
#[must_use]
pub fn board_verifies(board: &Board) -> bool {
    House::ALL.iter().all(|house| {
        let mut seen = DigitSet::EMPTY;
        for pos in house.positions() {
            if let Some(digit) = board.get(pos) {
                seen.insert(digit);
            }
        }
        seen == DigitSet::FULL
    })
}
