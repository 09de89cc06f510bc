//! End-to-end solves against known boards.

use tierdoku_core::{Board, Position};
use tierdoku_solver::{
    Difficulty, SolveResult, Solver, SolverConfig, board_verifies, hypothesis,
};

const PUZZLE: &str =
    "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
const SOLUTION: &str =
    "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

fn solution_board() -> Board {
    SOLUTION.parse().unwrap()
}

#[test]
fn test_solves_classic_puzzle() {
    let outcome = Solver::default().solve_line(PUZZLE).unwrap();
    assert_eq!(outcome.result, SolveResult::Solved(solution_board()));
    assert!(outcome.passes > 0);
}

#[test]
fn test_blanked_diagonal_is_very_easy() {
    // One blank per row, column, and box: every hole is a naked single.
    let mut board = solution_board();
    for (row, col) in [
        (0, 0),
        (1, 3),
        (2, 6),
        (3, 1),
        (4, 4),
        (5, 7),
        (6, 2),
        (7, 5),
        (8, 8),
    ] {
        board.set(Position::new(row, col), None);
    }
    let outcome = Solver::default().solve(board);
    assert_eq!(outcome.result, SolveResult::Solved(solution_board()));
    assert!(outcome.max_stall <= 1);
    assert_eq!(outcome.difficulty, Difficulty::VeryEasy);
}

#[test]
fn test_blanked_row_resolves_from_columns() {
    let mut board = solution_board();
    for col in 0..9 {
        board.set(Position::new(0, col), None);
    }
    let outcome = Solver::default().solve(board);
    assert_eq!(outcome.result, SolveResult::Solved(solution_board()));
    assert_eq!(outcome.difficulty, Difficulty::VeryEasy);
}

#[test]
fn test_blanked_box_resolves_from_rows_and_columns() {
    let mut board = solution_board();
    for row in 3..6 {
        for col in 3..6 {
            board.set(Position::new(row, col), None);
        }
    }
    let outcome = Solver::default().solve(board);
    assert_eq!(outcome.result, SolveResult::Solved(solution_board()));
}

#[test]
fn test_unsolvable_board_exhausts() {
    // The solution with (0, 0) blanked and (0, 1) rewritten from 3 to 5:
    // between its row and column, (0, 0) loses all nine digits.
    let text = "054678912672195348198342567859761423426853791713924856961537284287419635345286179";
    let outcome = Solver::default().solve_line(text).unwrap();
    assert_eq!(outcome.result, SolveResult::Exhausted);
    assert_eq!(outcome.difficulty, Difficulty::VeryHard);
    assert!(outcome.solution().is_none());
}

#[test]
fn test_solved_boards_verify() {
    let outcome = Solver::default().solve_line(PUZZLE).unwrap();
    let board = outcome.solution().unwrap();
    assert!(board_verifies(board));
}

/// Puzzles with known unique solutions, as `(puzzle, solution)` pairs.
const CORPUS: [(&str, &str); 2] = [
    (PUZZLE, SOLUTION),
    (
        "003020600900305001001806400008102900700000008006708200002609500800203009005010300",
        "483921657967345821251876493548132976729564138136798245372689514814253769695417382",
    ),
];

#[test]
fn test_corpus_solves_match_known_solutions() {
    let solver = Solver::default();
    for (puzzle, expected) in CORPUS {
        let outcome = solver.solve_line(puzzle).unwrap();
        let solution: Board = expected.parse().unwrap();
        assert_eq!(outcome.result, SolveResult::Solved(solution), "{puzzle}");
    }
}

#[test]
fn test_hypothesis_never_discards_solution_digits() {
    // A puzzle far beyond the deterministic tiers, so the solve spends
    // most of its passes in hypothesis rounds. Its solution is unique:
    // any cell the solver fills that disagrees with it means pruning or
    // forced-value agreement discarded the true digit somewhere.
    let board: Board =
        "800000000003600000070090200050007000000045700000100030001000068008500010090000400"
            .parse()
            .unwrap();
    let solution: Board =
        "812753649943682175675491283154237896369845721287169534521974368438526917796318452"
            .parse()
            .unwrap();

    let solver = Solver::new(SolverConfig {
        recursion_budget: 1,
    });
    let outcome = solver.solve_with_observer(board, |record| {
        for pos in Position::ALL {
            if let Some(digit) = record.board.get(pos) {
                assert_eq!(
                    Some(digit),
                    solution.get(pos),
                    "wrong digit at {pos} by pass {}",
                    record.pass
                );
            }
        }
    });
    assert!(outcome.max_stall >= hypothesis::MIN_STALL);
    if let Some(solved) = outcome.solution() {
        assert_eq!(solved, &solution);
    }
}
