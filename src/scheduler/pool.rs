//! Auditor pool: eligibility, load balancing, consumption.
//!
//! The pool answers three questions for the engine: who may take an
//! activity (coded auditors for Core work, everyone otherwise), who
//! still has budget, and who is least loaded. Insertion order is
//! significant — all ties on load go to the first-seen auditor, which
//! keeps runs deterministic.

use std::cmp::Ordering;

use crate::models::{Activity, Auditor};

/// The set of auditors owned by one scheduling run.
#[derive(Debug, Clone)]
pub struct AuditorPool {
    auditors: Vec<Auditor>,
}

impl AuditorPool {
    /// Creates a pool. The order of `auditors` is the tie-break order.
    pub fn new(auditors: Vec<Auditor>) -> Self {
        Self { auditors }
    }

    /// Number of auditors in the pool.
    pub fn len(&self) -> usize {
        self.auditors.len()
    }

    /// Whether the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.auditors.is_empty()
    }

    /// All auditors in pool order.
    pub fn auditors(&self) -> &[Auditor] {
        &self.auditors
    }

    /// The auditor at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Auditor> {
        self.auditors.get(index)
    }

    /// Indices of auditors allowed to take `activity`, in pool order.
    ///
    /// Core activities restrict to coded auditors. May be empty; the
    /// caller treats an empty set as Unassigned, never as an error.
    pub fn eligible_for(&self, activity: &Activity) -> Vec<usize> {
        self.auditors
            .iter()
            .enumerate()
            .filter(|(_, a)| !activity.is_core || a.is_coded)
            .map(|(i, _)| i)
            .collect()
    }

    /// Subset of `candidates` with remaining manday budget.
    pub fn available(&self, candidates: &[usize]) -> Vec<usize> {
        candidates
            .iter()
            .copied()
            .filter(|&i| self.auditors[i].is_available())
            .collect()
    }

    /// Index of the least-loaded candidate, first-seen winning ties.
    pub fn least_loaded(&self, candidates: &[usize]) -> Option<usize> {
        let mut best: Option<usize> = None;
        for &i in candidates {
            match best {
                None => best = Some(i),
                // Strict comparison keeps the earlier candidate on ties
                Some(b) if self.auditors[i].used_mandays < self.auditors[b].used_mandays => {
                    best = Some(i)
                }
                _ => {}
            }
        }
        best
    }

    /// Up to `k` least-loaded candidates, first-seen winning ties.
    pub fn k_least_loaded(&self, candidates: &[usize], k: usize) -> Vec<usize> {
        let mut order: Vec<usize> = candidates.to_vec();
        // Stable sort preserves pool order among equal loads
        order.sort_by(|&a, &b| {
            self.auditors[a]
                .used_mandays
                .partial_cmp(&self.auditors[b].used_mandays)
                .unwrap_or(Ordering::Equal)
        });
        order.truncate(k);
        order
    }

    /// Records consumption of `minutes` by the auditor at `index`.
    ///
    /// Soft capacity: overshooting the budget only makes the auditor
    /// unavailable for later picks.
    pub fn consume(&mut self, index: usize, minutes: u32) {
        if let Some(auditor) = self.auditors.get_mut(index) {
            auditor.consume_minutes(minutes);
        }
    }

    /// Resets every auditor to the start-of-run state.
    pub fn reset(&mut self) {
        for auditor in &mut self.auditors {
            auditor.reset();
        }
    }

    /// Names of the auditors at the given indices, in the given order.
    pub fn names(&self, indices: &[usize]) -> Vec<String> {
        indices
            .iter()
            .filter_map(|&i| self.auditors.get(i))
            .map(|a| a.name.clone())
            .collect()
    }
}
