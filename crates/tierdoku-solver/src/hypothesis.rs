//! Bounded trial-and-error search for boards the deterministic tiers
//! cannot crack.
//!
//! When every tier has stalled, the solver picks a cell, tries each of
//! its remaining candidates in a cloned state, and runs a full nested
//! solve on each clone. Two deductions come back to the real state:
//!
//! * **Pruning**: a candidate whose branch ends in a contradiction is
//!   impossible and gets excluded.
//! * **Forced values**: a cell assigned the same digit in every branch
//!   must hold that digit regardless of which candidate is right.
//!   Contradicted branches still take part in the agreement: one that
//!   leaves the cell empty or disagrees blocks the forced value.
//!
//! Nesting is limited by a recursion budget; a branch at budget zero
//! runs the deterministic tiers only.

use tierdoku_core::{Board, Position};

use crate::{STALL_LIMIT, SolverState, solver::run_pass};

/// Lowest stall-counter value at which hypothesis search activates.
pub const MIN_STALL: u8 = 5;

/// Runs one round of hypothesis search.
///
/// The stall counter selects the cells to probe: only cells with exactly
/// `stall - 3` candidates are tried, so deeper stalls widen the net from
/// two-candidate cells upward. The first cell that yields a deduction
/// ends the round.
///
/// Returns `true` if any new exclusion was proven.
pub fn apply(state: &mut SolverState, stall: u8, budget: u32) -> bool {
    debug_assert!(stall >= MIN_STALL);
    if budget == 0 {
        return false;
    }
    let target = usize::from(stall - 3);
    for pos in Position::ALL {
        if !state.board().is_empty_at(pos) {
            continue;
        }
        if state.candidates_at(pos).len() != target {
            continue;
        }
        if explore_cell(state, pos, budget) {
            return true;
        }
    }
    false
}

/// Tries every candidate of one cell in its own cloned state.
fn explore_cell(state: &mut SolverState, pos: Position, budget: u32) -> bool {
    let mut progressed = false;
    // Board cells assigned identically in every branch so far; `None`
    // until the first branch comes back. Contradicted branches are
    // intersected too, so a cell they left open is never forced.
    let mut agreed: Option<Board> = None;

    for digit in state.candidates_at(pos) {
        let mut branch = state.clone();
        branch.assign(pos, digit);
        log::trace!("hypothesis: trying {digit} at {pos}");
        sub_solve(&mut branch, budget - 1);

        if branch.has_contradiction() {
            log::trace!("hypothesis: {digit} at {pos} contradicts");
            progressed |= state.exclude(pos, digit);
        }
        agreed = Some(match agreed {
            None => *branch.board(),
            Some(mut common) => {
                for p in Position::ALL {
                    if common.get(p) != branch.board().get(p) {
                        common.set(p, None);
                    }
                }
                common
            }
        });
    }

    if let Some(common) = agreed {
        for p in Position::ALL {
            if !state.board().is_empty_at(p) {
                continue;
            }
            let Some(forced) = common.get(p) else {
                continue;
            };
            for excluded in state.candidates_at(p) {
                if excluded != forced {
                    progressed |= state.exclude(p, excluded);
                }
            }
        }
    }
    progressed
}

/// Runs a nested solve on a branch state until its own stall counter
/// runs out.
///
/// The branch is not checked for completion or contradiction; it runs
/// its full schedule either way. All that matters afterwards is its
/// board content and whether it contradicted.
fn sub_solve(state: &mut SolverState, budget: u32) {
    let mut stall: u8 = 0;
    while stall <= STALL_LIMIT {
        if run_pass(state, stall, budget) {
            stall = 0;
        } else {
            stall += 1;
        }
    }
}
