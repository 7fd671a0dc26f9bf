//! Greedy scheduling: time grid, auditor pool, assignment engine, KPIs.
//!
//! # Algorithm
//!
//! [`AssignmentEngine`] is a deterministic greedy single pass: for each
//! activity in queue order it picks the least-loaded eligible
//! auditor(s), consumes their manday budget, and places the next
//! lunch-avoiding slot on the [`TimeGrid`]. It never backtracks and
//! never fails — infeasible activities come out as Unassigned rows.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod engine;
mod grid;
mod kpi;
mod pool;

pub use engine::{AssignmentEngine, EngineConfig, ScheduleRequest};
pub use grid::TimeGrid;
pub use kpi::ScheduleKpi;
pub use pool::AuditorPool;
