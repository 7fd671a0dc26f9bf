//! Day-scheduling for audit visits.
//!
//! Builds the timed agenda of one audit visit: activities (Core ones
//! needing a coded auditor) are placed into consecutive lunch-avoiding
//! slots and assigned to the least-loaded eligible auditors within
//! their manday budgets. One manday is 8 working hours.
//!
//! The engine is a deterministic greedy single pass. It never
//! backtracks and does not guarantee a feasible assignment when
//! constraints are tight: activities that find no auditor are emitted
//! as Unassigned rows, so a complete time-ordered schedule always
//! comes out.
//!
//! # Modules
//!
//! - **`models`**: domain types — `Activity`, `Auditor`, `WorkDay`,
//!   `TimeSlot`, `Assignment`, `Schedule`
//! - **`scheduler`**: the algorithm — `TimeGrid`, `AuditorPool`,
//!   `AssignmentEngine`, `ScheduleKpi`
//! - **`validation`**: advisory input checks
//! - **`export`**: flat rows for the external spreadsheet/grid layer
//!
//! # Example
//!
//! ```
//! use audit_schedule::models::{Activity, Auditor};
//! use audit_schedule::scheduler::AssignmentEngine;
//! use audit_schedule::export;
//! use chrono::NaiveDate;
//!
//! let activities = vec![
//!     Activity::new("Opening Meeting"),
//!     Activity::new("Process Audit").core(),
//!     Activity::new("Records Review"),
//! ];
//! let auditors = vec![
//!     Auditor::new("Priya", 5.0).coded(),
//!     Auditor::new("Marco", 5.0),
//! ];
//! let date = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
//!
//! let schedule = AssignmentEngine::new().schedule(&activities, &auditors, date);
//! let rows = export::to_rows(&schedule, "Plant 7");
//!
//! assert_eq!(rows.len(), 3);
//! assert_eq!(rows[0].start_time, "09:00");
//! // The third slot is shifted past the 13:00-13:30 lunch break
//! assert_eq!(rows[2].start_time, "13:30");
//! ```
//!
//! Web forms, spreadsheet serialization, charts, and authentication
//! are external collaborators: the caller provides activities and
//! auditors and consumes the schedule.

pub mod export;
pub mod models;
pub mod scheduler;
pub mod validation;
