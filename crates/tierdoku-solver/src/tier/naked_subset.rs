use tierdoku_core::{House, Position};
use tinyvec::ArrayVec;

use crate::{SolverState, tier::Tier};

/// Tier 4: k cells sharing the same k candidates lock those digits out of
/// the rest of the house.
///
/// Cells are matched on their exclusion sets, so only cells whose
/// constraints are byte-for-byte identical form a subset. The group size
/// must equal the shared candidate count and lie in 2..=8; a lone cell
/// with one candidate is placement's job, and nine matching cells would
/// say nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedSubset;

impl Tier for NakedSubset {
    fn name(&self) -> &'static str {
        "naked subset"
    }

    fn apply(&self, state: &mut SolverState) -> bool {
        let mut progressed = false;
        for house in House::ALL {
            let positions = house.positions();
            for (i, &lead) in positions.iter().enumerate() {
                if !state.board().is_empty_at(lead) {
                    continue;
                }
                let exclusions = state.exclusions_at(lead);
                let candidates = !exclusions;
                if !(2..=8).contains(&candidates.len()) {
                    continue;
                }
                // Scanning only forward keeps each group detected once,
                // from its first cell.
                let mut group: ArrayVec<[Position; 9]> = ArrayVec::new();
                group.push(lead);
                for &pos in &positions[i + 1..] {
                    if state.board().is_empty_at(pos) && state.exclusions_at(pos) == exclusions {
                        group.push(pos);
                    }
                }
                if group.len() != candidates.len() {
                    continue;
                }
                let mut fired = false;
                for pos in positions {
                    if group.contains(&pos) {
                        continue;
                    }
                    for digit in candidates {
                        fired |= state.exclude(pos, digit);
                    }
                }
                if fired {
                    log::trace!(
                        "naked subset: {candidates:?} locked into {} cells of {house}",
                        group.len()
                    );
                    progressed = true;
                }
            }
        }
        progressed
    }
}
