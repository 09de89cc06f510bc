//! Assertion harness for exercising individual tiers in tests.

use tierdoku_core::{Board, Digit, DigitSet, Position};

use crate::{SolverState, tier::Tier};

/// Applies tiers to a state and asserts on the resulting exclusions.
///
/// Methods chain by value:
///
/// ```
/// use tierdoku_core::{Position, digit::Digit::*};
/// use tierdoku_solver::{testing::TierTester, tier::BasicElimination};
///
/// TierTester::from_str(
///     "
///     5__ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
/// ",
/// )
/// .apply_expect_progress(&BasicElimination)
/// .assert_excluded(Position::new(0, 8), [D5]);
/// ```
#[derive(Debug, Clone)]
pub struct TierTester {
    state: SolverState,
    baseline: SolverState,
}

impl TierTester {
    /// Creates a tester for a puzzle given as a board string.
    ///
    /// # Panics
    ///
    /// Panics if the text is not a valid board.
    #[track_caller]
    #[must_use]
    pub fn from_str(text: &str) -> Self {
        let board: Board = match text.parse() {
            Ok(board) => board,
            Err(e) => panic!("invalid board: {e}"),
        };
        Self::new(SolverState::new(board))
    }

    /// Creates a tester around a prepared state.
    #[must_use]
    pub fn new(state: SolverState) -> Self {
        Self {
            baseline: state.clone(),
            state,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> &SolverState {
        &self.state
    }

    /// Applies a tier, with no expectation on progress.
    #[must_use]
    pub fn apply(mut self, tier: &dyn Tier) -> Self {
        tier.apply(&mut self.state);
        self
    }

    /// Applies a tier and asserts that it proved something new.
    #[track_caller]
    #[must_use]
    pub fn apply_expect_progress(mut self, tier: &dyn Tier) -> Self {
        assert!(
            tier.apply(&mut self.state),
            "{} should have progressed",
            tier.name()
        );
        self
    }

    /// Applies a tier and asserts that it found nothing.
    #[track_caller]
    #[must_use]
    pub fn apply_expect_no_progress(mut self, tier: &dyn Tier) -> Self {
        assert!(
            !tier.apply(&mut self.state),
            "{} should not have progressed",
            tier.name()
        );
        self
    }

    /// Asserts that each digit is excluded at the position.
    #[track_caller]
    #[must_use]
    pub fn assert_excluded(self, pos: Position, digits: impl IntoIterator<Item = Digit>) -> Self {
        let exclusions = self.state.exclusions_at(pos);
        for digit in digits {
            assert!(
                exclusions.contains(digit),
                "{digit} should be excluded at {pos}, exclusions: {exclusions:?}"
            );
        }
        self
    }

    /// Asserts that the digit is still allowed at the position.
    #[track_caller]
    #[must_use]
    pub fn assert_not_excluded(self, pos: Position, digit: Digit) -> Self {
        let exclusions = self.state.exclusions_at(pos);
        assert!(
            !exclusions.contains(digit),
            "{digit} should not be excluded at {pos}, exclusions: {exclusions:?}"
        );
        self
    }

    /// Asserts that the position's candidates are exactly `digits`.
    #[track_caller]
    #[must_use]
    pub fn assert_candidates(self, pos: Position, digits: impl IntoIterator<Item = Digit>) -> Self {
        let expected: DigitSet = digits.into_iter().collect();
        let actual = self.state.candidates_at(pos);
        assert_eq!(actual, expected, "candidates at {pos}");
        self
    }

    /// Asserts that the position has been narrowed to a single candidate.
    #[track_caller]
    #[must_use]
    pub fn assert_forced(self, pos: Position, digit: Digit) -> Self {
        let candidates = self.state.candidates_at(pos);
        assert_eq!(
            candidates.as_single(),
            Some(digit),
            "{pos} should be forced to {digit}, candidates: {candidates:?}"
        );
        self
    }

    /// Asserts that the position is untouched since the tester was built:
    /// same board content, same exclusions.
    #[track_caller]
    #[must_use]
    pub fn assert_no_change(self, pos: Position) -> Self {
        assert_eq!(
            self.state.board().get(pos),
            self.baseline.board().get(pos),
            "board content at {pos} changed"
        );
        assert_eq!(
            self.state.exclusions_at(pos),
            self.baseline.exclusions_at(pos),
            "exclusions at {pos} changed"
        );
        self
    }
}
