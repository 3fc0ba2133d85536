//! Batch plan quality metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total Time | Sum of per-batch longest durations |
//! | Sequential Time | Sum of every job duration (no batching) |
//! | Time Saved | Sequential time - total time |
//! | Avg Volume Utilization | Mean of batch volume / max_volume |
//! | Avg Item Fill | Mean of batch item count / max_items |

use crate::models::{BatchPlan, Job, MachineConstraints};

/// Batch plan performance indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanKpi {
    /// Number of batches.
    pub batch_count: usize,
    /// Number of planned jobs.
    pub job_count: usize,
    /// Elapsed time of the plan.
    pub total_time: f64,
    /// Time if every job ran alone, one after another.
    pub sequential_time: f64,
    /// `sequential_time - total_time`.
    pub time_saved: f64,
    /// Mean volume utilization per batch (0.0..1.0).
    pub avg_volume_utilization: f64,
    /// Mean item-slot fill per batch (0.0..1.0).
    pub avg_item_fill: f64,
}

impl PlanKpi {
    /// Computes KPIs from a plan and its input.
    ///
    /// # Arguments
    /// * `plan` - The batches produced by the planner.
    /// * `jobs` - The planned jobs (for sequential time).
    /// * `constraints` - The machine the plan targets.
    pub fn calculate(plan: &BatchPlan, jobs: &[Job], constraints: &MachineConstraints) -> Self {
        let batch_count = plan.batch_count();
        let total_time = plan.total_time();
        let sequential_time = jobs.iter().fold(0.0, |acc, j| acc + j.duration);

        let (avg_volume_utilization, avg_item_fill) = if batch_count == 0 {
            (0.0, 0.0)
        } else {
            let n = batch_count as f64;
            let volume: f64 = plan
                .batches
                .iter()
                .map(|b| b.volume / constraints.max_volume)
                .sum();
            let fill: f64 = plan
                .batches
                .iter()
                .map(|b| b.item_count() as f64 / constraints.max_items as f64)
                .sum();
            (volume / n, fill / n)
        };

        Self {
            batch_count,
            job_count: plan.job_count(),
            total_time,
            sequential_time,
            time_saved: sequential_time - total_time,
            avg_volume_utilization,
            avg_item_fill,
        }
    }
}
