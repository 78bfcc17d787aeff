//! Timesheet error types.

use std::path::PathBuf;

use thiserror::Error;
use timekeep::time::TimeOfDayError;

/// Errors raised while loading or summing a timesheet.
#[derive(Debug, Error)]
pub enum TimesheetError {
    /// The durations file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A line did not hold a valid duration.
    #[error("{origin}:{line}: {source}")]
    Entry {
        /// Where the entries came from (a path or `<args>`).
        origin: String,
        /// 1-based line number.
        line: usize,
        /// Why the line was rejected.
        #[source]
        source: TimeOfDayError,
    },
    /// The total no longer fits in a second counter.
    #[error("total duration overflows")]
    Overflow,
}
