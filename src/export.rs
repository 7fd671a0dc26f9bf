//! Flat-table output contract.
//!
//! Renders a [`Schedule`] into spreadsheet-shaped rows. Pure
//! formatting: the layer that writes the actual workbook or grid is
//! outside this crate and consumes these rows as-is (they serialize
//! with the column names as keys).

use serde::{Deserialize, Serialize};

use crate::models::Schedule;

/// Label used for activities that found no auditor.
pub const UNASSIGNED_LABEL: &str = "Unassigned";

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// One row of the exported schedule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Site being visited.
    #[serde(rename = "Site")]
    pub site: String,
    /// Slot date, `YYYY-MM-DD`.
    #[serde(rename = "Date")]
    pub date: String,
    /// Slot start, `HH:MM`.
    #[serde(rename = "Start Time")]
    pub start_time: String,
    /// Slot end, `HH:MM`.
    #[serde(rename = "End Time")]
    pub end_time: String,
    /// Activity name.
    #[serde(rename = "Activity")]
    pub activity: String,
    /// `Core` or `Non-Core`.
    #[serde(rename = "Core Status")]
    pub core_status: String,
    /// Comma-separated auditor names, or `Unassigned`.
    #[serde(rename = "Assigned Auditor")]
    pub assigned_auditors: String,
    /// Comma-separated names of every auditor that was eligible.
    #[serde(rename = "Allowed Auditors")]
    pub allowed_auditors: String,
}

impl ScheduleRow {
    /// Column names, in output order.
    pub const HEADERS: [&'static str; 8] = [
        "Site",
        "Date",
        "Start Time",
        "End Time",
        "Activity",
        "Core Status",
        "Assigned Auditor",
        "Allowed Auditors",
    ];
}

/// Renders a schedule as flat rows, preserving emission order.
pub fn to_rows(schedule: &Schedule, site: &str) -> Vec<ScheduleRow> {
    schedule
        .assignments
        .iter()
        .map(|a| ScheduleRow {
            site: site.to_string(),
            date: a.slot.date().format(DATE_FORMAT).to_string(),
            start_time: a.slot.start.format(TIME_FORMAT).to_string(),
            end_time: a.slot.end.format(TIME_FORMAT).to_string(),
            activity: a.activity.clone(),
            core_status: a.core_status.to_string(),
            assigned_auditors: if a.is_assigned() {
                a.auditors.join(", ")
            } else {
                UNASSIGNED_LABEL.to_string()
            },
            allowed_auditors: a.allowed_auditors.join(", "),
        })
        .collect()
}
