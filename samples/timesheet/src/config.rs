//! Command-line configuration.
//!
//! Every option can also be provided through a `TIMESHEET_*` environment
//! variable; explicit arguments take precedence.

use std::path::PathBuf;

use clap::Parser;
use timekeep::time::TimeOfDay;

/// Sum `HH:MM:SS` durations and work out when a shift ends.
#[derive(Debug, Clone, Parser)]
#[command(name = "timesheet")]
#[command(about = "Sum HH:MM:SS durations and report when the work is done")]
pub struct TimesheetConfig {
    /// Time the work starts at.
    #[arg(long, env = "TIMESHEET_START")]
    pub start: Option<TimeOfDay>,

    /// Finishing later than this counts as overtime.
    #[arg(long, env = "TIMESHEET_END_OF_DAY", default_value = "17:00:00")]
    pub end_of_day: TimeOfDay,

    /// File with one duration per line; `#` starts a comment.
    #[arg(long, env = "TIMESHEET_FILE")]
    pub file: Option<PathBuf>,

    /// Durations given directly.
    pub durations: Vec<TimeOfDay>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn parses_positional_durations() {
        let config =
            TimesheetConfig::try_parse_from(["timesheet", "01:07:02", "1:05:08"]).unwrap();
        assert_eq!(
            config.durations,
            vec![
                TimeOfDay::new(1, 7, 2).unwrap(),
                TimeOfDay::new(1, 5, 8).unwrap()
            ]
        );
        assert_eq!(config.end_of_day, TimeOfDay::new(17, 0, 0).unwrap());
        assert_eq!(config.start, None);
    }

    #[rstest]
    fn parses_start_and_end_of_day() {
        let config = TimesheetConfig::try_parse_from([
            "timesheet",
            "--start",
            "09:45:00",
            "--end-of-day",
            "18:30:00",
        ])
        .unwrap();
        assert_eq!(config.start, Some(TimeOfDay::new(9, 45, 0).unwrap()));
        assert_eq!(config.end_of_day, TimeOfDay::new(18, 30, 0).unwrap());
    }

    #[rstest]
    fn rejects_invalid_duration() {
        let result = TimesheetConfig::try_parse_from(["timesheet", "01:60:00"]);
        assert!(result.is_err());
    }
}
