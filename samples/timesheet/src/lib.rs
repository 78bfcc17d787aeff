//! Timesheet sample application.
//!
//! Reads `HH:MM:SS` durations from the command line and from files, adds
//! them up with `timekeep`, and reports when a shift that starts at a given
//! time would finish.

pub mod config;
pub mod error;
pub mod sheet;

pub use config::TimesheetConfig;
pub use error::TimesheetError;
pub use sheet::{Summary, parse_entries, summarize};
