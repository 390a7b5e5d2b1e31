//! Doctor availability schedule and its filter view.
//!
//! The schedule is static reference data: each entry pairs a doctor's name
//! with two parallel sequences of weekday labels and time-range labels. The
//! filter view is a pure projection over that list; it never mutates the
//! underlying data and is cheap enough to recompute on every keystroke.

use crate::error::ConfigError;
use serde::Serialize;

/// One row group of the availability table.
///
/// `days` and `times` are parallel: `times[i]` is the time range the doctor
/// works on `days[i]`. The constructor enforces that both sequences have the
/// same length, so positional pairing is always safe.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DoctorScheduleEntry {
    name: String,
    days: Vec<String>,
    times: Vec<String>,
}

impl DoctorScheduleEntry {
    /// Create a schedule entry, checking the parallel-array invariant.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ScheduleShape`] when `days` and `times` differ
    /// in length.
    pub fn new(
        name: impl Into<String>,
        days: Vec<String>,
        times: Vec<String>,
    ) -> Result<Self, ConfigError> {
        let name = name.into();
        if days.len() != times.len() {
            return Err(ConfigError::ScheduleShape {
                name,
                days: days.len(),
                times: times.len(),
            });
        }
        Ok(Self { name, days, times })
    }

    /// The doctor's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Weekday labels, in table order.
    pub fn days(&self) -> &[String] {
        &self.days
    }

    /// Time-range labels, positionally matching [`days`](Self::days).
    pub fn times(&self) -> &[String] {
        &self.times
    }

    /// Iterate the entry as `(day, time)` table rows.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &str)> {
        self.days
            .iter()
            .zip(&self.times)
            .map(|(day, time)| (day.as_str(), time.as_str()))
    }
}

/// Filter schedule entries by doctor name.
///
/// Matching is a case-insensitive substring test, so `"mahnoor"` matches
/// `"Dr. Mahnoor Saleem"`. An empty filter returns every entry. Order is
/// preserved and the input is never mutated.
pub fn filter_schedule<'a>(
    entries: &'a [DoctorScheduleEntry],
    filter: &str,
) -> Vec<&'a DoctorScheduleEntry> {
    let needle = filter.to_lowercase();
    entries
        .iter()
        .filter(|entry| entry.name.to_lowercase().contains(&needle))
        .collect()
}
