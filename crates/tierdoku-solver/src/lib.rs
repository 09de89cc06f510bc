//! A tiered constraint-propagation Sudoku solver.
//!
//! The solver works in passes over a [`SolverState`]. Each pass runs the
//! propagation tiers selected by a stall counter, then places every cell
//! narrowed to a single candidate. Progress resets the counter; a barren
//! pass increments it, escalating the next pass to a stronger (and more
//! expensive) tier, and eventually to [`hypothesis`] search. The counter
//! exceeding [`STALL_LIMIT`] ends the solve.
//!
//! The highest counter value a solve reaches doubles as its
//! [`Difficulty`] rating.
//!
//! ```
//! use tierdoku_solver::{SolveResult, Solver};
//!
//! let outcome = Solver::default()
//!     .solve_line("003020600900305001001806400008102900700000008006708200002609500800203009005010300")
//!     .unwrap();
//! assert!(matches!(outcome.result, SolveResult::Solved(_)));
//! ```

pub use self::{
    solver::{
        Difficulty, PassRecord, STALL_LIMIT, SolveOutcome, SolveResult, Solver, SolverConfig,
    },
    state::SolverState,
    verify::board_verifies,
};

pub mod hypothesis;
pub mod placement;
mod solver;
mod state;
pub mod testing;
pub mod tier;
mod verify;
