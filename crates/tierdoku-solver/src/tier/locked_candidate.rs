use tierdoku_core::{House, Position};

use crate::{SolverState, tier::Tier};

/// Tier 2: a digit confined to the intersection of two houses is excluded
/// from the rest of both.
///
/// If the 2 or 3 cells that still allow a digit within one house all lie
/// inside a second house of a different kind, the digit must be placed in
/// the intersection, so it can be removed from every other cell of the
/// second house. Covers both the pointing case (box restricts a line) and
/// the claiming case (line restricts a box).
#[derive(Debug, Default, Clone, Copy)]
pub struct LockedCandidate;

impl Tier for LockedCandidate {
    fn name(&self) -> &'static str {
        "locked candidate"
    }

    fn apply(&self, state: &mut SolverState) -> bool {
        let mut progressed = false;
        for house in House::ALL {
            let assigned = state.assigned_digits(house);
            for digit in !assigned {
                let cells = state.candidate_cells_in(house, digit);
                if !(2..=3).contains(&cells.len()) {
                    continue;
                }
                let Some(other) = containing_house(house, &cells) else {
                    continue;
                };
                let mut fired = false;
                for pos in other.positions() {
                    if state.board().is_empty_at(pos) && !cells.contains(&pos) {
                        fired |= state.exclude(pos, digit);
                    }
                }
                if fired {
                    log::trace!("locked candidate: {digit} in {house} locked into {other}");
                    progressed = true;
                }
            }
        }
        progressed
    }
}

/// Finds a house of a different kind than `house` that contains every cell
/// in `cells`.
fn containing_house(house: House, cells: &[Position]) -> Option<House> {
    let (first, rest) = cells.split_first()?;
    let candidates = [
        House::row_of(*first),
        House::column_of(*first),
        House::box_of(*first),
    ];
    candidates.into_iter().find(|other| {
        std::mem::discriminant(other) != std::mem::discriminant(&house)
            && rest.iter().all(|pos| other.contains(*pos))
    })
}
