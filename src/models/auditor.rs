//! Auditor model.
//!
//! Auditors are the resources of a scheduling run. Each carries a
//! permanent capability flag (coded) and a manday budget that is
//! consumed as activities are assigned.
//!
//! # Manday Arithmetic
//!
//! One manday equals 8 working hours (480 minutes). A standard
//! 90-minute activity therefore consumes 0.1875 mandays. Budgets are
//! small float sums; comparisons use a tolerance.

use serde::{Deserialize, Serialize};

/// Manday conversion constant: 8 hours of work.
pub const MINUTES_PER_MANDAY: f64 = 480.0;

/// Tolerance for manday comparisons.
pub(crate) const MANDAY_EPSILON: f64 = 1e-9;

/// Converts a duration in minutes to mandays.
pub fn mandays_for_minutes(minutes: u32) -> f64 {
    f64::from(minutes) / MINUTES_PER_MANDAY
}

/// An auditor available for assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Auditor {
    /// Auditor name, unique within a scheduling run.
    pub name: String,
    /// Certified for Core activities. A capability, not a workload state.
    pub is_coded: bool,
    /// Total manday budget for this run.
    pub available_mandays: f64,
    /// Mandays consumed so far in this run.
    pub used_mandays: f64,
}

impl Auditor {
    /// Creates a non-coded auditor with the given manday budget.
    pub fn new(name: impl Into<String>, available_mandays: f64) -> Self {
        Self {
            name: name.into(),
            is_coded: false,
            available_mandays,
            used_mandays: 0.0,
        }
    }

    /// Marks this auditor as coded.
    pub fn coded(mut self) -> Self {
        self.is_coded = true;
        self
    }

    /// Remaining manday budget (may go slightly negative at the soft cap).
    pub fn remaining_mandays(&self) -> f64 {
        self.available_mandays - self.used_mandays
    }

    /// Whether this auditor can take further work.
    ///
    /// Soft capacity limit: consumption that reaches or passes the
    /// budget makes the auditor unavailable for later picks, it is
    /// never an error.
    pub fn is_available(&self) -> bool {
        self.used_mandays + MANDAY_EPSILON < self.available_mandays
    }

    /// Records consumption of `minutes` of work.
    pub fn consume_minutes(&mut self, minutes: u32) {
        self.used_mandays += mandays_for_minutes(minutes);
    }

    /// Resets consumption to the start-of-run state.
    pub fn reset(&mut self) {
        self.used_mandays = 0.0;
    }
}
