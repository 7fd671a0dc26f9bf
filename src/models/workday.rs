//! Working-day boundaries and the lunch window.
//!
//! Defaults follow the common audit-day convention: 09:00–18:00 with a
//! fixed 13:00–13:30 lunch break. The lunch window is half-open
//! `[start, end)`: a slot ending exactly at 13:00 does not overlap it,
//! and a slot starting exactly at 13:30 does not either.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid wall-clock time")
}

/// Minutes elapsed since midnight for a time of day.
pub(crate) fn minutes_from_midnight(time: NaiveTime) -> i64 {
    i64::from(time.num_seconds_from_midnight()) / 60
}

/// The fixed midday break, a half-open time-of-day interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LunchWindow {
    /// Break start (inclusive).
    pub start: NaiveTime,
    /// Break end (exclusive).
    pub end: NaiveTime,
}

impl LunchWindow {
    /// Creates a lunch window.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Break length in minutes.
    pub fn duration_minutes(&self) -> i64 {
        minutes_from_midnight(self.end) - minutes_from_midnight(self.start)
    }

    /// Whether a candidate slot of `minutes` starting at `slot_start`
    /// would intersect this window.
    ///
    /// Works in minutes-from-midnight so that candidate ends past
    /// midnight still count as overlapping.
    pub fn overlaps(&self, slot_start: NaiveTime, minutes: i64) -> bool {
        let start = minutes_from_midnight(slot_start);
        let end = start + minutes;
        start < minutes_from_midnight(self.end) && minutes_from_midnight(self.start) < end
    }
}

impl Default for LunchWindow {
    fn default() -> Self {
        Self::new(hm(13, 0), hm(13, 30))
    }
}

/// Working-day boundaries for a scheduling run.
///
/// All slot placement happens between `day_start` and `day_end`;
/// a slot that would pass `day_end` rolls to the next calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkDay {
    /// First schedulable time of day.
    pub day_start: NaiveTime,
    /// Day boundary; slots must end at or before it.
    pub day_end: NaiveTime,
    /// The midday break no slot may intersect.
    pub lunch: LunchWindow,
}

impl WorkDay {
    /// Creates a working day with the default lunch window.
    pub fn new(day_start: NaiveTime, day_end: NaiveTime) -> Self {
        Self {
            day_start,
            day_end,
            lunch: LunchWindow::default(),
        }
    }

    /// Sets the lunch window.
    pub fn with_lunch(mut self, lunch: LunchWindow) -> Self {
        self.lunch = lunch;
        self
    }

    /// Schedulable minutes in one day, lunch excluded.
    pub fn working_minutes(&self) -> i64 {
        minutes_from_midnight(self.day_end)
            - minutes_from_midnight(self.day_start)
            - self.lunch.duration_minutes()
    }
}

impl Default for WorkDay {
    fn default() -> Self {
        Self::new(hm(9, 0), hm(18, 0))
    }
}
