//! Converting fully constrained cells into assignments.

use tierdoku_core::Position;

use crate::SolverState;

/// Assigns every empty cell whose exclusion set has exactly 8 members its
/// one remaining candidate.
///
/// Returns `true` if any cell was assigned. Idempotent when nothing
/// qualifies; placement is the only component that writes digits into the
/// board during a solve.
pub fn place_singles(state: &mut SolverState) -> bool {
    let mut progressed = false;
    for pos in Position::ALL {
        if !state.board().is_empty_at(pos) {
            continue;
        }
        if let Some(digit) = state.candidates_at(pos).as_single() {
            state.assign(pos, digit);
            log::trace!("placed {digit} at {pos}");
            progressed = true;
        }
    }
    progressed
}
