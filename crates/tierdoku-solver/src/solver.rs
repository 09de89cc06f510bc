//! The solve driver: repeated passes under a stall-counter escalation
//! schedule.

use derive_more::Display;
use tierdoku_core::{Board, ParseBoardError};

use crate::{
    SolverState, hypothesis,
    placement::place_singles,
    tier::active_tiers,
    verify::board_verifies,
};

/// Highest stall-counter value before the solver gives up.
///
/// The counter walks the escalation schedule: values 0-4 select one
/// propagation tier each, 5 and up hand passes to hypothesis search, and
/// the counter reaching `STALL_LIMIT` triggers one last catch-all pass
/// with every tier before the solve is declared exhausted.
pub const STALL_LIMIT: u8 = 12;

/// Tunable knobs for a [`Solver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// How many levels of hypothesis search may nest inside each other.
    ///
    /// Zero disables hypothesis search entirely.
    pub recursion_budget: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            recursion_budget: 3,
        }
    }
}

/// How hard a puzzle fought back, derived from the deepest escalation
/// the solve needed.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Difficulty {
    /// Solved by basic elimination and hidden singles alone.
    #[display("very easy")]
    VeryEasy,
    /// Needed locked candidates.
    #[display("easy")]
    Easy,
    /// Needed hidden subsets.
    #[display("medium")]
    Medium,
    /// Needed naked subsets.
    #[display("hard")]
    Hard,
    /// Needed hypothesis search, or was never solved at all.
    #[display("very hard")]
    VeryHard,
}

impl Difficulty {
    /// Classifies a solve from the highest stall-counter value it reached.
    #[must_use]
    pub const fn from_max_stall(max_stall: u8) -> Self {
        match max_stall {
            0 | 1 => Self::VeryEasy,
            2 => Self::Easy,
            3 => Self::Medium,
            4 => Self::Hard,
            _ => Self::VeryHard,
        }
    }
}

/// Terminal state of a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveResult {
    /// The board was completed and passed verification.
    Solved(Board),
    /// Every escalation level ran dry before the board was complete.
    Exhausted,
}

/// A finished solve: the result plus how the solve went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveOutcome {
    /// Solved board or exhaustion.
    pub result: SolveResult,
    /// Difficulty class derived from `max_stall`.
    pub difficulty: Difficulty,
    /// Highest stall-counter value the solve reached.
    pub max_stall: u8,
    /// Number of passes executed.
    pub passes: u32,
}

impl SolveOutcome {
    /// Returns the solved board, if the solve succeeded.
    #[must_use]
    pub const fn solution(&self) -> Option<&Board> {
        match &self.result {
            SolveResult::Solved(board) => Some(board),
            SolveResult::Exhausted => None,
        }
    }
}

/// One driver pass, as reported to a solve observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassRecord {
    /// 1-based pass number.
    pub pass: u32,
    /// Stall-counter value the pass ran under.
    pub stall: u8,
    /// Highest stall-counter value reached so far, this pass included.
    ///
    /// This is the running difficulty rating; the final pass's value is
    /// the outcome's `max_stall`.
    pub max_stall: u8,
    /// Whether the pass proved anything new.
    pub progressed: bool,
    /// Board content after the pass.
    pub board: Board,
}

/// The puzzle solver.
///
/// # Examples
///
/// ```
/// use tierdoku_solver::{SolveResult, Solver};
///
/// let solver = Solver::default();
/// let outcome = solver
///     .solve_line("530070000600195000098000060800060003400803001700020006060000280000419005000080079")
///     .unwrap();
/// assert!(matches!(outcome.result, SolveResult::Solved(_)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// Creates a solver with the given configuration.
    #[must_use]
    pub const fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Solves a board.
    #[must_use]
    pub fn solve(&self, board: Board) -> SolveOutcome {
        self.solve_with_observer(board, |_| {})
    }

    /// Parses a puzzle line and solves it.
    pub fn solve_line(&self, line: &str) -> Result<SolveOutcome, ParseBoardError> {
        Ok(self.solve(line.parse()?))
    }

    /// Solves a board, reporting every pass to `observer`.
    ///
    /// Passes run until the board verifies or the stall counter exceeds
    /// [`STALL_LIMIT`]. A pass that proves at least one new fact resets
    /// the counter to zero; a barren pass increments it, moving the next
    /// pass up the escalation schedule.
    #[must_use]
    pub fn solve_with_observer(
        &self,
        board: Board,
        mut observer: impl FnMut(&PassRecord),
    ) -> SolveOutcome {
        let mut state = SolverState::new(board);
        let mut stall: u8 = 0;
        let mut max_stall: u8 = 0;
        let mut passes: u32 = 0;

        let result = loop {
            if board_verifies(state.board()) {
                break SolveResult::Solved(*state.board());
            }
            if stall > STALL_LIMIT {
                break SolveResult::Exhausted;
            }
            passes += 1;
            let ran_at = stall;
            let progressed = run_pass(&mut state, stall, self.config.recursion_budget);
            log::debug!(
                "pass {passes}: stall {stall}, {} empty, progressed: {progressed}",
                state.board().empty_count()
            );
            if progressed {
                stall = 0;
            } else {
                stall += 1;
                // The rating scale tops out at the stall limit.
                max_stall = max_stall.max(stall.min(STALL_LIMIT));
            }
            observer(&PassRecord {
                pass: passes,
                stall: ran_at,
                max_stall,
                progressed,
                board: *state.board(),
            });
        };

        let outcome = SolveOutcome {
            result,
            difficulty: Difficulty::from_max_stall(max_stall),
            max_stall,
            passes,
        };
        log::info!(
            "solve finished after {} passes: {:?}, {}",
            outcome.passes,
            outcome.result,
            outcome.difficulty
        );
        outcome
    }
}

/// Runs one pass at a given stall level: active tiers, then placement,
/// then hypothesis search if nothing else moved.
///
/// Shared by the driver and by nested solves inside hypothesis branches.
pub(crate) fn run_pass(state: &mut SolverState, stall: u8, budget: u32) -> bool {
    let mut progressed = false;
    for tier in active_tiers(stall) {
        if tier.apply(state) {
            log::debug!("{} progressed", tier.name());
            progressed = true;
        }
    }
    progressed |= place_singles(state);
    if !progressed && stall >= hypothesis::MIN_STALL {
        progressed = hypothesis::apply(state, stall, budget);
    }
    progressed
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLUTION: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    #[test]
    fn test_difficulty_classification() {
        assert_eq!(Difficulty::from_max_stall(0), Difficulty::VeryEasy);
        assert_eq!(Difficulty::from_max_stall(1), Difficulty::VeryEasy);
        assert_eq!(Difficulty::from_max_stall(2), Difficulty::Easy);
        assert_eq!(Difficulty::from_max_stall(3), Difficulty::Medium);
        assert_eq!(Difficulty::from_max_stall(4), Difficulty::Hard);
        assert_eq!(Difficulty::from_max_stall(5), Difficulty::VeryHard);
        assert_eq!(Difficulty::from_max_stall(STALL_LIMIT), Difficulty::VeryHard);
    }

    #[test]
    fn test_difficulty_display() {
        assert_eq!(Difficulty::VeryEasy.to_string(), "very easy");
        assert_eq!(Difficulty::VeryHard.to_string(), "very hard");
    }

    #[test]
    fn test_already_solved_board_takes_no_passes() {
        let board: Board = SOLUTION.parse().unwrap();
        let outcome = Solver::default().solve(board);
        assert_eq!(outcome.result, SolveResult::Solved(board));
        assert_eq!(outcome.passes, 0);
        assert_eq!(outcome.max_stall, 0);
        assert_eq!(outcome.difficulty, Difficulty::VeryEasy);
    }

    #[test]
    fn test_observer_sees_every_pass() {
        let mut board: Board = SOLUTION.parse().unwrap();
        board.set(tierdoku_core::Position::new(0, 0), None);
        let mut records = Vec::new();
        let outcome = Solver::default().solve_with_observer(board, |record| {
            records.push(*record);
        });
        assert!(matches!(outcome.result, SolveResult::Solved(_)));
        assert_eq!(records.len() as u32, outcome.passes);
        assert_eq!(records[0].pass, 1);
        assert!(records.last().unwrap().board.is_full());
    }

    #[test]
    fn test_observer_reports_running_max_stall() {
        // The solution with (0, 0) blanked and (0, 1) flipped to 5,
        // which collides with the 5 already in column 1: (0, 0) ends up
        // with no candidates and every pass is barren.
        let board: Board =
            "054678912672195348198342567859761423426853791713924856961537284287419635345286179"
                .parse()
                .unwrap();
        let mut records = Vec::new();
        let outcome = Solver::default().solve_with_observer(board, |record| {
            records.push(*record);
        });
        assert_eq!(outcome.result, SolveResult::Exhausted);
        assert!(
            records
                .windows(2)
                .all(|pair| pair[0].max_stall <= pair[1].max_stall)
        );
        assert_eq!(records.last().unwrap().max_stall, outcome.max_stall);
        assert_eq!(outcome.max_stall, STALL_LIMIT);
    }

    #[test]
    fn test_outcome_solution_accessor() {
        let board: Board = SOLUTION.parse().unwrap();
        let outcome = Solver::default().solve(board);
        assert_eq!(outcome.solution(), Some(&board));
    }
}
