//! Error type shared by the CLI commands.

use std::path::PathBuf;

use tierdoku_core::ParseBoardError;

/// Any failure a CLI command can report.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum CliError {
    /// Reading or writing a file failed.
    #[display("i/o error: {_0}")]
    Io(std::io::Error),
    /// The puzzle argument was not a valid board.
    #[display("invalid puzzle: {_0}")]
    Puzzle(ParseBoardError),
    /// A corpus line did not have the expected three fields.
    #[display("{}:{line}: malformed record, expected \"<index> <puzzle> <expected>\"", path.display())]
    #[from(skip)]
    MalformedRecord {
        /// Corpus file the record came from.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
    },
    /// A corpus line carried an unparseable puzzle.
    #[display("{}:{line}: {source}", path.display())]
    #[from(skip)]
    RecordPuzzle {
        /// Corpus file the record came from.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// The underlying parse failure.
        source: ParseBoardError,
    },
}
