//! Loading and summing timesheet entries.

use std::fmt;
use std::path::Path;

use timekeep::time::TimeOfDay;

use crate::error::TimesheetError;

/// Parses one duration per line, skipping blank lines and `#` comments.
///
/// `origin` names the source in error messages.
///
/// # Errors
///
/// Returns [`TimesheetError::Entry`] for the first line that is not a valid
/// `H:MM:SS` duration.
pub fn parse_entries(origin: &str, text: &str) -> Result<Vec<TimeOfDay>, TimesheetError> {
    text.lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let entry = line.split('#').next().unwrap_or_default().trim();
            (!entry.is_empty()).then_some((index + 1, entry))
        })
        .map(|(line, entry)| {
            entry
                .parse::<TimeOfDay>()
                .map_err(|source| TimesheetError::Entry {
                    origin: origin.to_string(),
                    line,
                    source,
                })
        })
        .collect()
}

/// Reads and parses a durations file.
///
/// # Errors
///
/// Returns [`TimesheetError::Read`] if the file cannot be read, or the
/// errors of [`parse_entries`].
pub fn load_file(path: &Path) -> Result<Vec<TimeOfDay>, TimesheetError> {
    let text = std::fs::read_to_string(path).map_err(|source| TimesheetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let entries = parse_entries(&path.display().to_string(), &text)?;
    tracing::debug!(path = %path.display(), count = entries.len(), "loaded durations");
    Ok(entries)
}

/// The outcome of summing a timesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Number of entries summed.
    pub entries: usize,
    /// Sum of every entry.
    pub total: TimeOfDay,
    /// `start + total`, when a start time was given.
    pub finish: Option<TimeOfDay>,
    /// Whether `finish` is after the end of the working day.
    pub overtime: bool,
}

impl fmt::Display for Summary {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "total: {} ({} entries)", self.total, self.entries)?;
        if let Some(finish) = self.finish {
            write!(formatter, "\nfinish: {finish}")?;
            if self.overtime {
                write!(formatter, " (overtime)")?;
            }
        }
        Ok(())
    }
}

/// Adds up `durations` and, given a start time, works out the finishing time.
///
/// # Errors
///
/// Returns [`TimesheetError::Overflow`] if the total or the finishing time
/// does not fit in a second counter.
pub fn summarize(
    durations: &[TimeOfDay],
    start: Option<TimeOfDay>,
    end_of_day: TimeOfDay,
) -> Result<Summary, TimesheetError> {
    let total = durations
        .iter()
        .try_fold(TimeOfDay::MIDNIGHT, |total, duration| {
            total.checked_add(*duration)
        })
        .ok_or(TimesheetError::Overflow)?;

    let finish = start
        .map(|start| start.checked_add(total).ok_or(TimesheetError::Overflow))
        .transpose()?;
    let overtime = finish.is_some_and(|finish| finish.is_after(&end_of_day));

    if overtime {
        tracing::warn!(%end_of_day, "shift runs past the end of the day");
    }

    Ok(Summary {
        entries: durations.len(),
        total,
        finish,
        overtime,
    })
}
