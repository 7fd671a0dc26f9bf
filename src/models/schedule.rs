//! Schedule (solution) model.
//!
//! A schedule is the ordered output of one scheduling run: timed
//! assignments of activities to auditors. Assignments are immutable
//! once emitted; an empty auditor list marks an Unassigned activity
//! (the run never drops or aborts on one).

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::CoreStatus;

/// A half-open calendar interval `[start, end)` occupied by one activity.
///
/// Start and end carry their date, so a slot rolled past the day
/// boundary spans calendar days naturally.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Slot start (inclusive).
    pub start: NaiveDateTime,
    /// Slot end (exclusive).
    pub end: NaiveDateTime,
}

impl TimeSlot {
    /// Creates a time slot.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// The date the slot starts on.
    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }

    /// Slot length in minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Whether two slots intersect.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// One scheduled (or Unassigned) activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    /// Activity name.
    pub activity: String,
    /// Core/Non-Core marking at assignment time.
    pub core_status: CoreStatus,
    /// Assigned auditor names in pick order. Empty = Unassigned.
    pub auditors: Vec<String>,
    /// Auditors that were eligible when the slot was placed.
    pub allowed_auditors: Vec<String>,
    /// The time window this activity occupies.
    pub slot: TimeSlot,
}

impl Assignment {
    /// Creates an assignment record.
    pub fn new(
        activity: impl Into<String>,
        core_status: CoreStatus,
        auditors: Vec<String>,
        allowed_auditors: Vec<String>,
        slot: TimeSlot,
    ) -> Self {
        Self {
            activity: activity.into(),
            core_status,
            auditors,
            allowed_auditors,
            slot,
        }
    }

    /// Whether at least one auditor was assigned.
    pub fn is_assigned(&self) -> bool {
        !self.auditors.is_empty()
    }

    /// Whether the given auditor is on this assignment.
    pub fn involves(&self, auditor: &str) -> bool {
        self.auditors.iter().any(|a| a == auditor)
    }
}

/// A complete schedule for one scheduling run.
///
/// Assignments are kept in emission order, which is also time order:
/// the engine drives a single forward-moving time grid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schedule {
    /// Assignments in emission (time) order.
    pub assignments: Vec<Assignment>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an assignment.
    pub fn add_assignment(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Number of assignments (including Unassigned ones).
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Finds the assignment for a given activity name.
    pub fn assignment_for_activity(&self, activity: &str) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.activity == activity)
    }

    /// All assignments involving a given auditor.
    pub fn assignments_for_auditor(&self, auditor: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.involves(auditor))
            .collect()
    }

    /// Assignments that found no auditor.
    pub fn unassigned(&self) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| !a.is_assigned())
            .collect()
    }

    /// Number of Unassigned activities.
    pub fn unassigned_count(&self) -> usize {
        self.assignments.iter().filter(|a| !a.is_assigned()).count()
    }

    /// Latest end time across all assignments.
    pub fn end_of_schedule(&self) -> Option<NaiveDateTime> {
        self.assignments.iter().map(|a| a.slot.end).max()
    }

    /// Number of calendar days the schedule touches (0 when empty).
    pub fn span_days(&self) -> i64 {
        let first = self.assignments.iter().map(|a| a.slot.start.date()).min();
        let last = self.assignments.iter().map(|a| a.slot.end.date()).max();
        match (first, last) {
            (Some(first), Some(last)) => (last - first).num_days() + 1,
            _ => 0,
        }
    }
}
