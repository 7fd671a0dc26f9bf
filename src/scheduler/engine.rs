//! Greedy assignment engine.
//!
//! # Algorithm
//!
//! A single deterministic pass over the activity queue: pick the
//! least-loaded eligible auditor(s), consume their manday budget,
//! place the next lunch-avoiding slot, emit the assignment. No
//! backtracking — tight constraints degrade to Unassigned rows, never
//! to errors, so the caller always gets a complete time-ordered
//! schedule.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems",
//! Ch. 4: Priority Dispatching

use chrono::NaiveDate;
use tracing::{debug, warn};

use super::{AuditorPool, TimeGrid};
use crate::models::{
    Activity, Assignment, Auditor, Schedule, WorkDay, DEFAULT_DURATION_MINUTES,
};

/// Engine configuration.
///
/// Captures the variation points between planning conventions without
/// changing the algorithm itself.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Auditors per activity: 1 (solo) or 2 (pair auditing).
    pub assignment_width: usize,
    /// Substitute for activities with a zero duration.
    pub default_duration_minutes: u32,
    /// Working-day boundaries and lunch window.
    pub workday: WorkDay,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            assignment_width: 1,
            default_duration_minutes: DEFAULT_DURATION_MINUTES,
            workday: WorkDay::default(),
        }
    }
}

/// Input container for one scheduling run.
#[derive(Debug, Clone)]
pub struct ScheduleRequest {
    /// Site being visited.
    pub site: String,
    /// Audit type label (IA, P1..P5, RC), free-form.
    pub audit_type: Option<String>,
    /// First day of the visit.
    pub proposed_date: NaiveDate,
    /// Agenda in scheduling order.
    pub activities: Vec<Activity>,
    /// Auditor pool in tie-break order.
    pub auditors: Vec<Auditor>,
}

impl ScheduleRequest {
    /// Creates an empty request for a site and date.
    pub fn new(site: impl Into<String>, proposed_date: NaiveDate) -> Self {
        Self {
            site: site.into(),
            audit_type: None,
            proposed_date,
            activities: Vec::new(),
            auditors: Vec::new(),
        }
    }

    /// Sets the audit type label.
    pub fn with_audit_type(mut self, audit_type: impl Into<String>) -> Self {
        self.audit_type = Some(audit_type.into());
        self
    }

    /// Appends an activity to the agenda.
    pub fn with_activity(mut self, activity: Activity) -> Self {
        self.activities.push(activity);
        self
    }

    /// Appends an auditor to the pool.
    pub fn with_auditor(mut self, auditor: Auditor) -> Self {
        self.auditors.push(auditor);
        self
    }
}

/// Greedy single-pass scheduler for one audit visit.
///
/// # Example
///
/// ```
/// use audit_schedule::models::{Activity, Auditor};
/// use audit_schedule::scheduler::AssignmentEngine;
/// use chrono::NaiveDate;
///
/// let activities = vec![
///     Activity::new("Opening Meeting"),
///     Activity::new("Process Audit").core(),
/// ];
/// let auditors = vec![
///     Auditor::new("Priya", 5.0).coded(),
///     Auditor::new("Marco", 5.0),
/// ];
/// let date = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
///
/// let schedule = AssignmentEngine::new().schedule(&activities, &auditors, date);
/// assert_eq!(schedule.assignment_count(), 2);
/// assert_eq!(schedule.unassigned_count(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AssignmentEngine {
    config: EngineConfig,
}

impl AssignmentEngine {
    /// Creates an engine with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine from a configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Sets the number of auditors per activity (clamped to 1..=2).
    pub fn with_assignment_width(mut self, width: usize) -> Self {
        self.config.assignment_width = width.clamp(1, 2);
        self
    }

    /// Sets the substitute duration for zero-duration activities.
    pub fn with_default_duration_minutes(mut self, minutes: u32) -> Self {
        self.config.default_duration_minutes = minutes;
        self
    }

    /// Sets the working-day boundaries.
    pub fn with_workday(mut self, workday: WorkDay) -> Self {
        self.config.workday = workday;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Schedules an agenda against a fresh pool built from `auditors`.
    pub fn schedule(
        &self,
        activities: &[Activity],
        auditors: &[Auditor],
        proposed_date: NaiveDate,
    ) -> Schedule {
        let mut pool = AuditorPool::new(auditors.to_vec());
        self.schedule_with_pool(activities, &mut pool, proposed_date)
    }

    /// Schedules against a caller-owned pool.
    ///
    /// Passing the same pool through several runs shares the manday
    /// budget across sites; nothing coordinates fairness beyond the
    /// running `used_mandays` totals.
    pub fn schedule_with_pool(
        &self,
        activities: &[Activity],
        pool: &mut AuditorPool,
        proposed_date: NaiveDate,
    ) -> Schedule {
        let width = self.config.assignment_width.clamp(1, 2);
        let mut grid = TimeGrid::new(proposed_date, self.config.workday);
        let mut schedule = Schedule::new();

        for activity in activities {
            let duration = self.effective_duration(activity);
            let eligible = pool.eligible_for(activity);
            let available = pool.available(&eligible);
            let picked = pool.k_least_loaded(&available, width);
            for &index in &picked {
                pool.consume(index, duration);
            }

            let slot = grid.next_slot(duration);
            if picked.is_empty() {
                warn!(
                    activity = %activity.name,
                    core = activity.is_core,
                    "no eligible auditor with remaining capacity, emitting unassigned"
                );
            } else {
                debug!(
                    activity = %activity.name,
                    start = %slot.start,
                    end = %slot.end,
                    auditors = ?pool.names(&picked),
                    "placed activity"
                );
            }

            schedule.add_assignment(Assignment::new(
                &activity.name,
                activity.core_status(),
                pool.names(&picked),
                pool.names(&eligible),
                slot,
            ));
        }

        schedule
    }

    /// Schedules from a request container.
    pub fn schedule_request(&self, request: &ScheduleRequest) -> Schedule {
        self.schedule(
            &request.activities,
            &request.auditors,
            request.proposed_date,
        )
    }

    fn effective_duration(&self, activity: &Activity) -> u32 {
        if activity.duration_minutes == 0 {
            self.config.default_duration_minutes
        } else {
            activity.duration_minutes
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()
    }

    fn hm(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn three_activity_agenda() -> Vec<Activity> {
        vec![
            Activity::new("Opening Meeting"),
            Activity::new("Process Audit").core(),
            Activity::new("Records Review"),
        ]
    }

    fn two_auditor_pool() -> Vec<Auditor> {
        vec![
            Auditor::new("X", 5.0).coded(),
            Auditor::new("Y", 5.0),
        ]
    }

    #[test]
    fn test_three_activity_scenario() {
        // A → X (tie on zero load, first-seen), B → X (only coded),
        // C → Y (least loaded); C shifted past lunch.
        let schedule =
            AssignmentEngine::new().schedule(&three_activity_agenda(), &two_auditor_pool(), date());

        let a = schedule.assignment_for_activity("Opening Meeting").unwrap();
        assert_eq!(a.auditors, vec!["X"]);
        assert_eq!(a.slot.start, date().and_time(hm(9, 0)));
        assert_eq!(a.slot.end, date().and_time(hm(10, 30)));

        let b = schedule.assignment_for_activity("Process Audit").unwrap();
        assert_eq!(b.auditors, vec!["X"]);
        assert_eq!(b.allowed_auditors, vec!["X"]);
        assert_eq!(b.slot.end, date().and_time(hm(12, 0)));

        let c = schedule.assignment_for_activity("Records Review").unwrap();
        assert_eq!(c.auditors, vec!["Y"]);
        assert_eq!(c.slot.start, date().and_time(hm(13, 30)));
        assert_eq!(c.slot.end, date().and_time(hm(15, 0)));
    }

    #[test]
    fn test_core_without_coded_auditor_goes_unassigned() {
        let activities = vec![Activity::new("Process Audit").core()];
        let auditors = vec![Auditor::new("Y", 5.0)];
        let schedule = AssignmentEngine::new().schedule(&activities, &auditors, date());

        let a = schedule.assignment_for_activity("Process Audit").unwrap();
        assert!(!a.is_assigned());
        assert!(a.allowed_auditors.is_empty());
        // The slot is still placed; the run never halts
        assert_eq!(a.slot.start, date().and_time(hm(9, 0)));
    }

    #[test]
    fn test_capacity_exhaustion_emits_unassigned_tail() {
        // One auditor with budget for exactly two 90-minute slots
        let activities: Vec<Activity> = (0..4)
            .map(|i| Activity::new(format!("Activity {i}")))
            .collect();
        let auditors = vec![Auditor::new("X", 0.375)];
        let schedule = AssignmentEngine::new().schedule(&activities, &auditors, date());

        assert_eq!(schedule.assignment_count(), 4);
        assert_eq!(schedule.unassigned_count(), 2);
        assert!(schedule.assignments[0].is_assigned());
        assert!(schedule.assignments[1].is_assigned());
        assert!(!schedule.assignments[2].is_assigned());
        assert!(!schedule.assignments[3].is_assigned());
        // Unassigned activities still occupy ordered slots
        assert_eq!(
            schedule.assignments[2].slot.start,
            date().and_time(hm(13, 30))
        );
    }

    #[test]
    fn test_load_balancing_spreads_work() {
        let activities: Vec<Activity> = (0..4)
            .map(|i| Activity::new(format!("Activity {i}")))
            .collect();
        let schedule =
            AssignmentEngine::new().schedule(&activities, &two_auditor_pool(), date());

        // Alternating picks: X, Y, X, Y
        let picks: Vec<&str> = schedule
            .assignments
            .iter()
            .map(|a| a.auditors[0].as_str())
            .collect();
        assert_eq!(picks, vec!["X", "Y", "X", "Y"]);
    }

    #[test]
    fn test_pair_auditing_width_two() {
        let activities = vec![
            Activity::new("Process Audit").core(),
            Activity::new("Records Review"),
        ];
        let auditors = vec![
            Auditor::new("X", 5.0).coded(),
            Auditor::new("Y", 5.0),
            Auditor::new("Z", 5.0).coded(),
        ];
        let schedule = AssignmentEngine::new()
            .with_assignment_width(2)
            .schedule(&activities, &auditors, date());

        // Core pair: both coded auditors
        let core = schedule.assignment_for_activity("Process Audit").unwrap();
        assert_eq!(core.auditors, vec!["X", "Z"]);

        // Non-core pair: the two least-loaded overall → Y plus the
        // first-seen of the tied coded pair
        let review = schedule.assignment_for_activity("Records Review").unwrap();
        assert_eq!(review.auditors, vec!["Y", "X"]);
    }

    #[test]
    fn test_width_two_with_single_candidate() {
        let activities = vec![Activity::new("Process Audit").core()];
        let auditors = vec![Auditor::new("X", 5.0).coded(), Auditor::new("Y", 5.0)];
        let schedule = AssignmentEngine::new()
            .with_assignment_width(2)
            .schedule(&activities, &auditors, date());

        let a = schedule.assignment_for_activity("Process Audit").unwrap();
        assert_eq!(a.auditors, vec!["X"]);
    }

    #[test]
    fn test_zero_duration_gets_default() {
        let activities = vec![Activity::new("Briefing").with_duration_minutes(0)];
        let schedule =
            AssignmentEngine::new().schedule(&activities, &two_auditor_pool(), date());

        let a = schedule.assignment_for_activity("Briefing").unwrap();
        assert_eq!(a.slot.duration_minutes(), 90);
    }

    #[test]
    fn test_determinism() {
        let activities = three_activity_agenda();
        let auditors = two_auditor_pool();
        let engine = AssignmentEngine::new();

        let first = engine.schedule(&activities, &auditors, date());
        let second = engine.schedule(&activities, &auditors, date());

        assert_eq!(first.assignment_count(), second.assignment_count());
        for (a, b) in first.assignments.iter().zip(&second.assignments) {
            assert_eq!(a.activity, b.activity);
            assert_eq!(a.auditors, b.auditors);
            assert_eq!(a.slot, b.slot);
        }
    }

    #[test]
    fn test_no_slot_touches_lunch() {
        let activities: Vec<Activity> = (0..12)
            .map(|i| Activity::new(format!("Activity {i}")))
            .collect();
        let schedule =
            AssignmentEngine::new().schedule(&activities, &two_auditor_pool(), date());

        let lunch_start = hm(13, 0);
        let lunch_end = hm(13, 30);
        for a in &schedule.assignments {
            let start = a.slot.start.time();
            let end = a.slot.end.time();
            let crosses = start < lunch_end && lunch_start < end && start < end;
            assert!(!crosses, "{} intersects lunch: {:?}", a.activity, a.slot);
        }
    }

    #[test]
    fn test_per_auditor_slots_never_overlap() {
        let activities: Vec<Activity> = (0..8)
            .map(|i| Activity::new(format!("Activity {i}")))
            .collect();
        let schedule =
            AssignmentEngine::new().schedule(&activities, &two_auditor_pool(), date());

        for auditor in ["X", "Y"] {
            let slots: Vec<_> = schedule
                .assignments_for_auditor(auditor)
                .iter()
                .map(|a| a.slot)
                .collect();
            for (i, a) in slots.iter().enumerate() {
                for b in &slots[i + 1..] {
                    assert!(!a.overlaps(b));
                }
            }
        }
    }

    #[test]
    fn test_engine_never_picks_exhausted_auditor() {
        let activities: Vec<Activity> = (0..10)
            .map(|i| Activity::new(format!("Activity {i}")))
            .collect();
        // Budgets for two and three slots respectively
        let auditors = vec![Auditor::new("X", 0.375), Auditor::new("Y", 0.5625)];
        let schedule = AssignmentEngine::new().schedule(&activities, &auditors, date());

        let x_count = schedule.assignments_for_auditor("X").len();
        let y_count = schedule.assignments_for_auditor("Y").len();
        assert_eq!(x_count, 2);
        assert_eq!(y_count, 3);
        assert_eq!(schedule.unassigned_count(), 5);
    }

    #[test]
    fn test_shared_pool_across_sites() {
        let engine = AssignmentEngine::new();
        let mut pool = AuditorPool::new(vec![Auditor::new("X", 0.375)]);

        let first = engine.schedule_with_pool(
            &[Activity::new("Site A Review")],
            &mut pool,
            date(),
        );
        let second = engine.schedule_with_pool(
            &[Activity::new("Site B Review"), Activity::new("Site B Closing")],
            &mut pool,
            date(),
        );

        assert_eq!(first.unassigned_count(), 0);
        // The budget carried over: one slot left, then exhausted
        assert_eq!(second.unassigned_count(), 1);
    }

    #[test]
    fn test_schedule_request() {
        let request = ScheduleRequest::new("Plant 7", date())
            .with_audit_type("P1")
            .with_activity(Activity::new("Opening Meeting"))
            .with_auditor(Auditor::new("Priya", 5.0).coded());

        let schedule = AssignmentEngine::new().schedule_request(&request);
        assert_eq!(schedule.assignment_count(), 1);
        assert_eq!(
            schedule.assignments[0].auditors,
            vec!["Priya".to_string()]
        );
    }

    #[test]
    fn test_empty_inputs() {
        let engine = AssignmentEngine::new();
        let schedule = engine.schedule(&[], &[], date());
        assert_eq!(schedule.assignment_count(), 0);

        let no_auditors = engine.schedule(&[Activity::new("Review")], &[], date());
        assert_eq!(no_auditors.assignment_count(), 1);
        assert_eq!(no_auditors.unassigned_count(), 1);
    }
}
