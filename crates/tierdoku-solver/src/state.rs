//! Mutable solver state: the board plus per-cell exclusion sets.

use tierdoku_core::{Board, Digit, DigitSet, House, Position};
use tinyvec::ArrayVec;

/// The board together with the per-cell candidate-exclusion sets.
///
/// This is the single mutable value threaded through every pass of a
/// solve. There are no ambient globals: the driver owns one
/// `SolverState`, the propagation tiers and placement mutate it through
/// the methods below, and hypothesis search works on [`Clone`]d copies.
///
/// A clone is a *snapshot*: the state is two flat arrays of `Copy` data,
/// so cloning is cheap and restoring a snapshot is plain assignment.
/// Restoring is exact; a restored state is field-for-field identical to
/// the original.
///
/// Exclusion sets grow monotonically through a solve. The one sanctioned
/// exception is [`force_single`](Self::force_single), the hidden-single
/// replace, which swaps a cell's set for "everything but one digit" -- a
/// superset of whatever the cell had, so even that never forgets a proven
/// exclusion.
///
/// Exclusion sets are only meaningful for empty cells; assigned cells may
/// carry stale sets and nothing reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverState {
    board: Board,
    exclusions: [DigitSet; 81],
}

impl SolverState {
    /// Creates a fresh state for a puzzle: no exclusions proven yet.
    #[must_use]
    pub const fn new(board: Board) -> Self {
        Self {
            board,
            exclusions: [DigitSet::EMPTY; 81],
        }
    }

    /// Returns the current board.
    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the exclusion set of a cell.
    #[inline]
    #[must_use]
    pub const fn exclusions_at(&self, pos: Position) -> DigitSet {
        self.exclusions[pos.cell_index()]
    }

    /// Returns the allowed-candidate set of a cell: the complement of its
    /// exclusion set within 1-9.
    ///
    /// Only meaningful for empty cells.
    #[inline]
    #[must_use]
    pub fn candidates_at(&self, pos: Position) -> DigitSet {
        !self.exclusions_at(pos)
    }

    /// Marks a digit as impossible for a cell.
    ///
    /// Returns `true` if this is a newly proven exclusion. This is the
    /// only way exclusion sets grow, which keeps growth monotone.
    #[inline]
    pub fn exclude(&mut self, pos: Position, digit: Digit) -> bool {
        self.exclusions[pos.cell_index()].insert(digit)
    }

    /// Replaces a cell's exclusion set with "every digit except `digit`",
    /// forcing the cell's sole remaining candidate.
    ///
    /// This is only sound when `digit` is provably the unique candidate
    /// left for the cell; the prior exclusions are then a subset of the
    /// new set and discarding them loses nothing.
    pub fn force_single(&mut self, pos: Position, digit: Digit) {
        let old = self.exclusions_at(pos);
        debug_assert!(
            !old.contains(digit),
            "forcing {digit} at {pos}, but it is already excluded"
        );
        let new = !DigitSet::from_elem(digit);
        debug_assert!(old.is_subset(new));
        self.exclusions[pos.cell_index()] = new;
    }

    /// Assigns a digit to an empty cell.
    #[inline]
    pub fn assign(&mut self, pos: Position, digit: Digit) {
        debug_assert!(self.board.is_empty_at(pos), "cell {pos} already assigned");
        self.board.set(pos, Some(digit));
    }

    /// Returns the set of digits already assigned within a house.
    #[must_use]
    pub fn assigned_digits(&self, house: House) -> DigitSet {
        let mut digits = DigitSet::EMPTY;
        for pos in house.positions() {
            if let Some(digit) = self.board.get(pos) {
                digits.insert(digit);
            }
        }
        digits
    }

    /// Returns the empty cells of a house that still allow a digit, in
    /// house order.
    #[must_use]
    pub fn candidate_cells_in(&self, house: House, digit: Digit) -> ArrayVec<[Position; 9]> {
        let mut cells = ArrayVec::new();
        for pos in house.positions() {
            if self.board.is_empty_at(pos) && !self.exclusions_at(pos).contains(digit) {
                cells.push(pos);
            }
        }
        cells
    }

    /// Returns `true` if some empty cell has all nine digits excluded.
    ///
    /// Such a cell can hold nothing, so the state as a whole is
    /// illogical. The real solve never reaches this; hypothesis branches
    /// use it to prove a trial digit impossible.
    #[must_use]
    pub fn has_contradiction(&self) -> bool {
        Position::ALL
            .into_iter()
            .any(|pos| self.board.is_empty_at(pos) && self.exclusions_at(pos) == DigitSet::FULL)
    }
}
