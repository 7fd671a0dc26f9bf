//! Time grid: slot placement along the working day.
//!
//! The grid owns a cursor (date plus time of day) and hands out
//! consecutive, lunch-avoiding slots. A slot that would pass
//! `day_end` rolls over to the next calendar day at `day_start`.
//!
//! # Degenerate Durations
//!
//! `next_slot` never fails and never loops:
//!
//! - A duration longer than the longest lunch-free block of the day
//!   cannot avoid the break at all; it is placed unshifted and spans
//!   lunch.
//! - A duration too long even for a fresh day is emitted as a slot
//!   running past `day_end` after at most one rollover.
//!
//! There is no maximum-day cap: a long agenda yields a long schedule,
//! not an error.

use chrono::{Duration, NaiveDate, NaiveTime};

use crate::models::{minutes_from_midnight, TimeSlot, WorkDay};

/// Forward-moving slot allocator for one scheduling run.
#[derive(Debug, Clone)]
pub struct TimeGrid {
    workday: WorkDay,
    date: NaiveDate,
    cursor: NaiveTime,
}

impl TimeGrid {
    /// Creates a grid with the cursor at `day_start` on `date`.
    pub fn new(date: NaiveDate, workday: WorkDay) -> Self {
        Self {
            workday,
            date,
            cursor: workday.day_start,
        }
    }

    /// The date the next slot would start on.
    pub fn current_date(&self) -> NaiveDate {
        self.date
    }

    /// The time of day the next slot would be placed at.
    pub fn cursor(&self) -> NaiveTime {
        self.cursor.max(self.workday.day_start)
    }

    /// Produces the next available lunch-avoiding window of
    /// `duration_minutes` and advances the cursor to its end.
    ///
    /// A candidate that starts inside or straddles the lunch window is
    /// shifted to lunch end first; one that would then pass `day_end`
    /// is recomputed from `day_start` on the next calendar day.
    pub fn next_slot(&mut self, duration_minutes: u32) -> TimeSlot {
        let minutes = i64::from(duration_minutes);
        let duration = Duration::minutes(minutes);

        let mut date = self.date;
        let mut start = self.avoid_lunch(self.cursor(), minutes);

        if date.and_time(start) + duration > date.and_time(self.workday.day_end) {
            date = date + Duration::days(1);
            start = self.avoid_lunch(self.workday.day_start, minutes);
        }

        let start_dt = date.and_time(start);
        let end_dt = start_dt + duration;
        self.date = end_dt.date();
        self.cursor = end_dt.time();
        TimeSlot::new(start_dt, end_dt)
    }

    /// Shifts a candidate start past the lunch window if the slot
    /// would intersect it and shifting can help at all.
    fn avoid_lunch(&self, start: NaiveTime, minutes: i64) -> NaiveTime {
        let lunch = self.workday.lunch;
        if lunch.overlaps(start, minutes) && minutes <= self.longest_lunch_free_block() {
            lunch.end
        } else {
            start
        }
    }

    /// The larger of the two contiguous working blocks around lunch.
    /// Durations beyond it can never avoid the break.
    fn longest_lunch_free_block(&self) -> i64 {
        let before = minutes_from_midnight(self.workday.lunch.start)
            - minutes_from_midnight(self.workday.day_start);
        let after = minutes_from_midnight(self.workday.day_end)
            - minutes_from_midnight(self.workday.lunch.end);
        before.max(after)
    }
}
