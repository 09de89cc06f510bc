use tierdoku_core::{DigitSet, House};

use crate::{SolverState, tier::Tier};

/// Tier 1: a digit with only one legal cell in a house must go there.
///
/// For each house and each digit not yet assigned in it, if exactly one
/// empty cell still allows the digit, that cell's exclusion set is
/// *replaced* with "everything but this digit" and the digit is excluded
/// from every other cell of the house.
///
/// The replace is the one sanctioned shrink-then-regrow of a solve: the
/// forced digit was still allowed, so the prior exclusions were a subset
/// of the new set and only redundant information is discarded.
///
/// Progress is reported for the peer exclusions; the forced cell itself
/// is picked up by placement later in the same pass, so a hidden single
/// always resets the stall counter one way or the other.
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenSingle;

impl Tier for HiddenSingle {
    fn name(&self) -> &'static str {
        "hidden single"
    }

    fn apply(&self, state: &mut SolverState) -> bool {
        let mut progressed = false;
        for house in House::ALL {
            let assigned = state.assigned_digits(house);
            for digit in DigitSet::FULL - assigned {
                let cells = state.candidate_cells_in(house, digit);
                let &[chosen] = cells.as_slice() else {
                    continue;
                };
                state.force_single(chosen, digit);
                for pos in house.positions() {
                    if pos != chosen {
                        progressed |= state.exclude(pos, digit);
                    }
                }
                log::trace!("hidden single: {digit} confined to {chosen} in {house}");
            }
        }
        progressed
    }
}

#[cfg(test)]
mod tests {
    use tierdoku_core::{Board, Position, digit::Digit::*};

    use super::*;
    use crate::testing::TierTester;

    #[test]
    fn test_forces_sole_candidate_in_row() {
        let mut state = SolverState::new(Board::EMPTY);
        // Only (0, 3) still allows 5 in row 0.
        for pos in (House::Row { r: 0 }).positions() {
            if pos.col() != 3 {
                state.exclude(pos, D5);
            }
        }
        TierTester::new(state)
            .apply(&HiddenSingle)
            .assert_forced(Position::new(0, 3), D5);
    }

    #[test]
    fn test_forces_sole_candidate_in_box() {
        let mut state = SolverState::new(Board::EMPTY);
        // Only the center cell still allows 9 in the center box.
        for pos in (House::Box { index: 4 }).positions() {
            if pos != Position::new(4, 4) {
                state.exclude(pos, D9);
            }
        }
        TierTester::new(state)
            .apply(&HiddenSingle)
            .assert_forced(Position::new(4, 4), D9);
    }

    #[test]
    fn test_excludes_digit_from_peers() {
        let mut board = Board::EMPTY;
        board.set(Position::new(5, 0), Some(D3));
        let mut state = SolverState::new(board);
        // Confine 7 to (2, 0) within column 0. The assigned peer at
        // (5, 0) has no exclusions yet, so the peer sweep is what adds 7
        // to its set and reports progress.
        for pos in (House::Column { c: 0 }).positions() {
            if pos.row() != 2 && state.board().is_empty_at(pos) {
                state.exclude(pos, D7);
            }
        }
        TierTester::new(state)
            .apply_expect_progress(&HiddenSingle)
            .assert_forced(Position::new(2, 0), D7)
            .assert_excluded(Position::new(5, 0), [D7]);
    }

    #[test]
    fn test_skips_digits_already_assigned_in_house() {
        let mut board = Board::EMPTY;
        board.set(Position::new(0, 0), Some(D5));
        let mut state = SolverState::new(board);
        // Stale single-candidate pattern for an assigned digit must not fire.
        for pos in (House::Row { r: 0 }).positions() {
            if pos.col() > 1 {
                state.exclude(pos, D5);
            }
        }
        TierTester::new(state)
            .apply(&HiddenSingle)
            .assert_no_change(Position::new(0, 1));
    }

    #[test]
    fn test_no_change_without_hidden_singles() {
        TierTester::new(SolverState::new(Board::EMPTY))
            .apply_expect_no_progress(&HiddenSingle)
            .assert_no_change(Position::new(0, 0))
            .assert_no_change(Position::new(4, 4));
    }

    #[test]
    fn test_replace_keeps_prior_exclusions_redundant() {
        let mut state = SolverState::new(Board::EMPTY);
        let chosen = Position::new(0, 3);
        state.exclude(chosen, D1);
        state.exclude(chosen, D2);
        for pos in (House::Row { r: 0 }).positions() {
            if pos != chosen {
                state.exclude(pos, D5);
            }
        }
        let tester = TierTester::new(state).apply(&HiddenSingle);
        // The replaced set is exactly "all but 5": the old exclusions
        // {1, 2} are contained in it.
        tester.assert_forced(chosen, D5);
    }

    #[test]
    fn test_two_candidate_cells_do_not_fire() {
        let mut state = SolverState::new(Board::EMPTY);
        for pos in (House::Row { r: 0 }).positions() {
            if pos.col() > 1 {
                state.exclude(pos, D5);
            }
        }
        TierTester::new(state)
            .apply_expect_no_progress(&HiddenSingle)
            .assert_no_change(Position::new(0, 0))
            .assert_no_change(Position::new(0, 1));
    }
}
