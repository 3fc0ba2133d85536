//! Greedy batch planner and plan KPIs.
//!
//! # Algorithm
//!
//! `BatchPlanner` orders jobs by priority tier and packs them one pass,
//! no backtracking, into batches bounded by the machine's volume and item
//! limits. A batch takes as long as its slowest job; batches run back to
//! back. It is not optimal, but it is deterministic and explainable.
//!
//! # KPI
//!
//! `PlanKpi` summarizes a plan: batch count, time saved over running jobs
//! one at a time, and how full the batches are.

mod batch;
mod greedy;
mod kpi;

pub use batch::{OpenBatch, PlanState};
pub use greedy::{plan_request, BatchPlanner, PlanRequest};
pub use kpi::PlanKpi;
