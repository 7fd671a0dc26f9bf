//! Schedule load metrics.
//!
//! Read-side indicators for a completed run: how much of the agenda
//! found an auditor and how the manday budget spread across the pool.
//! No scheduling logic lives here.

use std::collections::HashMap;

use crate::models::{Schedule, MINUTES_PER_MANDAY};

/// Performance indicators for one schedule.
#[derive(Debug, Clone)]
pub struct ScheduleKpi {
    /// Total activities in the schedule.
    pub activity_count: usize,
    /// Activities that found no auditor.
    pub unassigned_count: usize,
    /// Fraction of activities with at least one auditor (0.0..1.0).
    pub assignment_rate: f64,
    /// Mandays consumed per auditor.
    pub mandays_by_auditor: HashMap<String, f64>,
    /// Heaviest single auditor load in mandays.
    pub max_load_mandays: f64,
    /// Mean load across auditors that received work.
    pub avg_load_mandays: f64,
    /// Calendar days the schedule touches.
    pub span_days: i64,
}

impl ScheduleKpi {
    /// Computes KPIs from a completed schedule.
    pub fn calculate(schedule: &Schedule) -> Self {
        let activity_count = schedule.assignment_count();
        let unassigned_count = schedule.unassigned_count();

        let mut mandays_by_auditor: HashMap<String, f64> = HashMap::new();
        for assignment in &schedule.assignments {
            let mandays = assignment.slot.duration_minutes() as f64 / MINUTES_PER_MANDAY;
            for auditor in &assignment.auditors {
                *mandays_by_auditor.entry(auditor.clone()).or_insert(0.0) += mandays;
            }
        }

        let max_load_mandays = mandays_by_auditor
            .values()
            .copied()
            .fold(0.0_f64, f64::max);
        let avg_load_mandays = if mandays_by_auditor.is_empty() {
            0.0
        } else {
            mandays_by_auditor.values().sum::<f64>() / mandays_by_auditor.len() as f64
        };

        let assignment_rate = if activity_count == 0 {
            1.0
        } else {
            (activity_count - unassigned_count) as f64 / activity_count as f64
        };

        Self {
            activity_count,
            unassigned_count,
            assignment_rate,
            mandays_by_auditor,
            max_load_mandays,
            avg_load_mandays,
            span_days: schedule.span_days(),
        }
    }

    /// Whether every activity found an auditor.
    pub fn is_fully_assigned(&self) -> bool {
        self.unassigned_count == 0
    }
}
