//! Activity model.
//!
//! An activity is one schedulable agenda item of an audit visit: an
//! opening meeting, a process walk-through, a records review. Core
//! activities may only be performed by coded (certified) auditors.
//!
//! # Duration Model
//!
//! Durations are whole minutes. The planning convention is a fixed
//! 90-minute slot per agenda item; alternatively a visit's manday
//! budget is split evenly across the agenda
//! (see [`evenly_distributed_minutes`]).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::auditor::MINUTES_PER_MANDAY;

/// Default activity duration when the caller provides none (minutes).
pub const DEFAULT_DURATION_MINUTES: u32 = 90;

/// Core/Non-Core marking of an activity.
///
/// Core activities restrict eligibility to coded auditors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoreStatus {
    /// Requires a coded auditor.
    Core,
    /// Any auditor is eligible.
    NonCore,
}

impl CoreStatus {
    /// Converts the boolean marking used on [`Activity`].
    pub fn from_core_flag(is_core: bool) -> Self {
        if is_core {
            Self::Core
        } else {
            Self::NonCore
        }
    }

    /// Whether this status requires a coded auditor.
    pub fn is_core(self) -> bool {
        matches!(self, Self::Core)
    }
}

impl fmt::Display for CoreStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Core => write!(f, "Core"),
            Self::NonCore => write!(f, "Non-Core"),
        }
    }
}

/// An audit activity to be scheduled.
///
/// Immutable during a scheduling run; the queue order given to the
/// engine decides who gets the least-loaded pick first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Activity name (agenda label).
    pub name: String,
    /// Whether only coded auditors are eligible.
    pub is_core: bool,
    /// Slot length in minutes. Zero means "use the engine default".
    pub duration_minutes: u32,
}

impl Activity {
    /// Creates a non-core activity with the default duration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_core: false,
            duration_minutes: DEFAULT_DURATION_MINUTES,
        }
    }

    /// Marks this activity as Core.
    pub fn core(mut self) -> Self {
        self.is_core = true;
        self
    }

    /// Sets the duration in minutes.
    pub fn with_duration_minutes(mut self, minutes: u32) -> Self {
        self.duration_minutes = minutes;
        self
    }

    /// The Core/Non-Core status of this activity.
    pub fn core_status(&self) -> CoreStatus {
        CoreStatus::from_core_flag(self.is_core)
    }
}

/// Splits a manday budget evenly across `count` activities.
///
/// Returns the per-activity duration in minutes, rounded to the nearest
/// minute, with a floor of one minute. Returns the default duration
/// when `count` is zero or the budget is non-positive.
pub fn evenly_distributed_minutes(total_mandays: f64, count: usize) -> u32 {
    if count == 0 || total_mandays <= 0.0 {
        return DEFAULT_DURATION_MINUTES;
    }
    let minutes = total_mandays * MINUTES_PER_MANDAY / count as f64;
    (minutes.round() as u32).max(1)
}
