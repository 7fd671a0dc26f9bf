//! Input validation for a scheduling run.
//!
//! Advisory pre-flight checks. The engine itself never fails — zero
//! durations get the default, impossible activities come out
//! Unassigned — so validation exists to let callers surface these
//! conditions before a schedule is generated.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{Activity, Auditor};

/// Validation result, collecting every finding.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation finding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Two auditors share the same name.
    #[error("duplicate auditor name: {0}")]
    DuplicateAuditor(String),
    /// An auditor (0-indexed) has an empty name.
    #[error("auditor {0} has an empty name")]
    UnnamedAuditor(usize),
    /// An auditor starts the run with no budget to spend.
    #[error("auditor '{0}' has a non-positive manday budget")]
    NonPositiveMandays(String),
    /// An activity (0-indexed) has an empty name.
    #[error("activity {0} has an empty name")]
    UnnamedActivity(usize),
    /// An activity has a zero duration (the engine substitutes the default).
    #[error("activity '{0}' has zero duration")]
    ZeroDuration(String),
    /// The pool is empty, so every activity will come out Unassigned.
    #[error("no auditors provided")]
    NoAuditors,
    /// A Core activity has no coded auditor anywhere in the pool.
    #[error("core activity '{0}' has no coded auditor in the pool")]
    NoCodedAuditor(String),
}

/// Checks a run's inputs and returns all findings at once.
///
/// A non-empty error list does not mean the engine would fail — it
/// degrades instead — only that the output will contain degraded rows
/// or substituted defaults.
pub fn validate_input(activities: &[Activity], auditors: &[Auditor]) -> ValidationResult {
    let mut errors = Vec::new();

    if auditors.is_empty() {
        errors.push(ValidationError::NoAuditors);
    }

    let mut names = HashSet::new();
    for (index, auditor) in auditors.iter().enumerate() {
        if auditor.name.trim().is_empty() {
            errors.push(ValidationError::UnnamedAuditor(index));
        } else if !names.insert(auditor.name.as_str()) {
            errors.push(ValidationError::DuplicateAuditor(auditor.name.clone()));
        }
        if auditor.available_mandays <= 0.0 {
            errors.push(ValidationError::NonPositiveMandays(auditor.name.clone()));
        }
    }

    let has_coded = auditors.iter().any(|a| a.is_coded);
    for (index, activity) in activities.iter().enumerate() {
        if activity.name.trim().is_empty() {
            errors.push(ValidationError::UnnamedActivity(index));
        }
        if activity.duration_minutes == 0 {
            errors.push(ValidationError::ZeroDuration(activity.name.clone()));
        }
        if activity.is_core && !has_coded {
            errors.push(ValidationError::NoCodedAuditor(activity.name.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
