//! Audit scheduling domain models.
//!
//! Value objects for one scheduling run: the agenda ([`Activity`]),
//! the people ([`Auditor`]), the day shape ([`WorkDay`]), and the
//! output ([`Assignment`], [`Schedule`]). All of them are plain data;
//! the algorithms live in [`crate::scheduler`].

mod activity;
mod auditor;
mod schedule;
mod workday;

pub use activity::{evenly_distributed_minutes, Activity, CoreStatus, DEFAULT_DURATION_MINUTES};
pub use auditor::{mandays_for_minutes, Auditor, MINUTES_PER_MANDAY};
pub use schedule::{Assignment, Schedule, TimeSlot};
pub use workday::{LunchWindow, WorkDay};

pub(crate) use workday::minutes_from_midnight;
