//! Batch solving of puzzle corpus files.
//!
//! A corpus line is three whitespace-separated fields: a puzzle index, the
//! 81-character puzzle, and its expected solution. For every attempted
//! line, one record of the form `<index> <solution>  <expected>` is
//! appended to the output file, with [`FAILURE_SENTINEL`] standing in for
//! the solution when the solve exhausted. Appending makes interrupted runs
//! resumable: the output file's line count is exactly the number of
//! puzzles already done.

use std::{
    fs::{File, OpenOptions},
    io::{self, BufRead, BufReader, Write as _},
    path::Path,
    time::Instant,
};

use tierdoku_core::Board;
use tierdoku_solver::{SolveResult, Solver};

use crate::{BatchArgs, error::CliError};

/// Solution field written when a puzzle could not be solved.
pub const FAILURE_SENTINEL: &str = "?";

/// Counters for a finished batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    /// Lines attempted.
    pub attempted: usize,
    /// Lines solved and verified.
    pub solved: usize,
}

#[derive(Debug)]
struct Record {
    index: String,
    board: Board,
    expected: String,
}

impl Record {
    fn parse(text: &str, path: &Path, line: usize) -> Result<Self, CliError> {
        let mut fields = text.split_whitespace();
        let (Some(index), Some(puzzle), Some(expected), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(CliError::MalformedRecord {
                path: path.to_path_buf(),
                line,
            });
        };
        let board = puzzle.parse().map_err(|source| CliError::RecordPuzzle {
            path: path.to_path_buf(),
            line,
            source,
        })?;
        Ok(Self {
            index: index.to_owned(),
            board,
            expected: expected.to_owned(),
        })
    }
}

/// Runs a batch job and prints a summary to stdout.
pub fn run(args: &BatchArgs) -> Result<BatchSummary, CliError> {
    let start_time = Instant::now();

    let mut output = match &args.output {
        Some(path) => {
            let (file, done) = prepare_output(path)?;
            if args.resume {
                log::info!("resuming at line {done}");
            }
            Some((file, done))
        }
        None => None,
    };
    let start = if args.resume {
        output.as_ref().map_or(0, |(_, done)| *done)
    } else {
        args.start
    };

    let reader = BufReader::new(File::open(&args.input)?);
    let solver = Solver::default();
    let mut summary = BatchSummary {
        attempted: 0,
        solved: 0,
    };

    println!("starting at line {start}");
    for (number, line) in reader.lines().enumerate().skip(start) {
        if args.count.is_some_and(|count| summary.attempted >= count) {
            break;
        }
        let record = Record::parse(&line?, &args.input, number + 1)?;
        summary.attempted += 1;

        let outcome = solver.solve(record.board);
        let solution = match outcome.result {
            SolveResult::Solved(board) => {
                summary.solved += 1;
                board.to_string()
            }
            SolveResult::Exhausted => FAILURE_SENTINEL.to_owned(),
        };
        log::debug!(
            "puzzle {}: {} ({})",
            record.index,
            if solution == FAILURE_SENTINEL {
                "exhausted"
            } else {
                "solved"
            },
            outcome.difficulty
        );
        if let Some((file, _)) = output.as_mut() {
            writeln!(file, "{} {solution}  {}", record.index, record.expected)?;
        }
    }

    println!("solved {}/{}", summary.solved, summary.attempted);
    if summary.attempted > 0 {
        let elapsed = start_time.elapsed();
        #[expect(clippy::cast_possible_truncation)]
        let per_puzzle = elapsed / summary.attempted as u32;
        println!("time taken: {elapsed:?} ({per_puzzle:?} per puzzle)");
    }
    Ok(summary)
}

/// Opens the output file for appending, repairing a missing trailing
/// newline so a partial last line cannot corrupt the next record.
///
/// Also returns the number of lines already present, which doubles as the
/// resume index.
fn prepare_output(path: &Path) -> Result<(File, usize), CliError> {
    let (done, missing_newline) = match std::fs::read_to_string(path) {
        Ok(text) => (text.lines().count(), !text.is_empty() && !text.ends_with('\n')),
        Err(e) if e.kind() == io::ErrorKind::NotFound => (0, false),
        Err(e) => return Err(e.into()),
    };
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    if missing_newline {
        file.write_all(b"\n")?;
    }
    Ok((file, done))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUZZLE: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";

    #[test]
    fn test_record_parse() {
        let path = Path::new("corpus.txt");
        let record = Record::parse(&format!("17 {PUZZLE} {PUZZLE}"), path, 18).unwrap();
        assert_eq!(record.index, "17");
        assert_eq!(record.expected, PUZZLE);
        assert_eq!(record.board.empty_count(), 51);
    }

    #[test]
    fn test_record_parse_rejects_wrong_field_count() {
        let path = Path::new("corpus.txt");
        let records = [
            String::new(),
            "17".to_owned(),
            format!("17 {PUZZLE}"),
            format!("17 {PUZZLE} {PUZZLE} extra"),
        ];
        for text in &records {
            let err = Record::parse(text, path, 3).unwrap_err();
            assert!(matches!(err, CliError::MalformedRecord { line: 3, .. }), "{text:?}");
        }
    }

    #[test]
    fn test_record_parse_rejects_bad_puzzle() {
        let path = Path::new("corpus.txt");
        let err = Record::parse(&format!("17 12345 {PUZZLE}"), path, 4).unwrap_err();
        assert!(matches!(err, CliError::RecordPuzzle { line: 4, .. }));
    }
}
