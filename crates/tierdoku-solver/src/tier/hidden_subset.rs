use tierdoku_core::{DigitSet, House};

use crate::{SolverState, tier::Tier};

/// Tier 3: k digits confined to the same k cells of a house claim those
/// cells outright.
///
/// If a group of digits all have exactly the same candidate cells within
/// a house, and the group is as large as the cell set, those cells can
/// hold nothing else: every digit outside the group is excluded from
/// them. The hidden-single case (k = 1) is tier 1's job and is not
/// re-detected here.
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenSubset;

impl Tier for HiddenSubset {
    fn name(&self) -> &'static str {
        "hidden subset"
    }

    fn apply(&self, state: &mut SolverState) -> bool {
        let mut progressed = false;
        for house in House::ALL {
            let assigned = state.assigned_digits(house);
            let unassigned = !assigned;
            let mut consumed = DigitSet::EMPTY;
            for digit in unassigned {
                if consumed.contains(digit) {
                    continue;
                }
                let cells = state.candidate_cells_in(house, digit);
                if cells.is_empty() {
                    continue;
                }
                // Gather every unassigned digit sharing this exact cell set.
                let mut group = DigitSet::from_elem(digit);
                for other in unassigned {
                    if other != digit && state.candidate_cells_in(house, other) == cells {
                        group.insert(other);
                    }
                }
                consumed |= group;
                if group.len() < 2 || group.len() != cells.len() {
                    continue;
                }
                let mut fired = false;
                for pos in cells {
                    for excluded in !group {
                        fired |= state.exclude(pos, excluded);
                    }
                }
                if fired {
                    log::trace!(
                        "hidden subset: {group:?} claim {} cells in {house}",
                        group.len()
                    );
                    progressed = true;
                }
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
    fn test_hidden_pair_claims_its_cells() {
        let mut state = SolverState::new(Board::EMPTY);
        // In row 0, digits 1 and 2 are only allowed at (0, 0) and (0, 1).
        for pos in (House::Row { r: 0 }).positions() {
            if pos.col() > 1 {
                state.exclude(pos, D1);
                state.exclude(pos, D2);
            }
        }
        TierTester::new(state)
            .apply_expect_progress(&HiddenSubset)
            .assert_candidates(Position::new(0, 0), [D1, D2])
            .assert_candidates(Position::new(0, 1), [D1, D2]);
    }

    #[test]
    fn test_hidden_triple_in_column() {
        let mut state = SolverState::new(Board::EMPTY);
        // In column 4, digits 7, 8, 9 are confined to rows 0, 1, 2.
        for pos in (House::Column { c: 4 }).positions() {
            if pos.row() > 2 {
                for digit in [D7, D8, D9] {
                    state.exclude(pos, digit);
                }
            }
        }
        TierTester::new(state)
            .apply_expect_progress(&HiddenSubset)
            .assert_candidates(Position::new(0, 4), [D7, D8, D9])
            .assert_candidates(Position::new(2, 4), [D7, D8, D9]);
    }

    #[test]
    fn test_mismatched_cell_sets_do_not_fire() {
        let mut state = SolverState::new(Board::EMPTY);
        // 1 is allowed at (0, 0) and (0, 1); 2 at (0, 0), (0, 1), (0, 2).
        for pos in (House::Row { r: 0 }).positions() {
            if pos.col() > 1 {
                state.exclude(pos, D1);
            }
            if pos.col() > 2 {
                state.exclude(pos, D2);
            }
        }
        TierTester::new(state)
            .apply_expect_no_progress(&HiddenSubset)
            .assert_not_excluded(Position::new(0, 0), D3);
    }

    #[test]
    fn test_single_digit_set_is_not_a_subset() {
        let mut state = SolverState::new(Board::EMPTY);
        // 5 alone confined to one cell is tier 1's pattern, not ours.
        for pos in (House::Row { r: 0 }).positions() {
            if pos.col() != 3 {
                state.exclude(pos, D5);
            }
        }
        TierTester::new(state)
            .apply_expect_no_progress(&HiddenSubset)
            .assert_not_excluded(Position::new(0, 3), D1);
    }
}
