use tierdoku_core::House;

use crate::{SolverState, tier::Tier};

/// Tier 0: a cell cannot hold a digit already assigned in one of its
/// houses.
///
/// For each house and each digit assigned somewhere in it, the digit is
/// excluded from every other empty cell of that house. This is the
/// workhorse rule; on easy puzzles the solver never needs anything else.
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicElimination;

impl Tier for BasicElimination {
    fn name(&self) -> &'static str {
        "basic elimination"
    }

    fn apply(&self, state: &mut SolverState) -> bool {
        let mut progressed = false;
        for house in House::ALL {
            let assigned = state.assigned_digits(house);
            if assigned.is_empty() {
                continue;
            }
            for pos in house.positions() {
                if !state.board().is_empty_at(pos) {
                    continue;
                }
                for digit in assigned {
                    progressed |= state.exclude(pos, digit);
                }
            }
        }
        progressed
    }
}
