//! Batch plan (solution) model.
//!
//! A plan is the ordered sequence of closed batches produced by the
//! planner. Batches run one after another on a single machine; all jobs
//! inside a batch run together and the batch finishes with its slowest job.

use serde::{Deserialize, Serialize};

/// A closed batch on the machine timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedBatch {
    /// Member job IDs in insertion order.
    pub job_ids: Vec<String>,
    /// Sum of member volumes.
    pub volume: f64,
    /// Longest member duration.
    pub duration: f64,
    /// Time the batch starts (end of the previous batch, or 0).
    pub start_time: f64,
}

impl PlannedBatch {
    /// Time the batch finishes.
    #[inline]
    pub fn end_time(&self) -> f64 {
        self.start_time + self.duration
    }

    /// Number of jobs in the batch.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.job_ids.len()
    }
}

/// Ordered batches produced by one planning call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchPlan {
    /// Batches in execution order.
    pub batches: Vec<PlannedBatch>,
}

impl BatchPlan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a closed batch.
    pub fn push(&mut self, batch: PlannedBatch) {
        self.batches.push(batch);
    }

    /// Number of batches.
    pub fn batch_count(&self) -> usize {
        self.batches.len()
    }

    /// Number of jobs across all batches.
    pub fn job_count(&self) -> usize {
        self.batches.iter().map(PlannedBatch::item_count).sum()
    }

    /// Total elapsed time: sum of each batch's longest duration.
    ///
    /// `0.0` for an empty plan (`f64::sum` would yield `-0.0`).
    pub fn total_time(&self) -> f64 {
        self.batches.iter().fold(0.0, |acc, b| acc + b.duration)
    }

    /// Job IDs batch by batch, preserving insertion order within a batch.
    pub fn print_order(&self) -> Vec<String> {
        self.batches
            .iter()
            .flat_map(|b| b.job_ids.iter().cloned())
            .collect()
    }

    /// Batch containing the given job, if any.
    pub fn batch_of(&self, job_id: &str) -> Option<&PlannedBatch> {
        self.batches
            .iter()
            .find(|b| b.job_ids.iter().any(|id| id == job_id))
    }

    /// Flattens the plan into the caller-facing result.
    pub fn to_result(&self) -> ScheduleResult {
        ScheduleResult {
            print_order: self.print_order(),
            total_time: self.total_time(),
        }
    }
}

impl From<BatchPlan> for ScheduleResult {
    fn from(plan: BatchPlan) -> Self {
        plan.to_result()
    }
}

/// Final output of a planning call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Job IDs in processing order.
    pub print_order: Vec<String>,
    /// Sum of each batch's longest duration.
    pub total_time: f64,
}

impl ScheduleResult {
    /// Whether nothing was scheduled.
    pub fn is_empty(&self) -> bool {
        self.print_order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(ids: &[&str], volume: f64, duration: f64, start_time: f64) -> PlannedBatch {
        PlannedBatch {
            job_ids: ids.iter().map(|s| s.to_string()).collect(),
            volume,
            duration,
            start_time,
        }
    }

    fn sample_plan() -> BatchPlan {
        let mut plan = BatchPlan::new();
        plan.push(batch(&["M1", "M2"], 250.0, 120.0, 0.0));
        plan.push(batch(&["M3"], 120.0, 150.0, 120.0));
        plan
    }

    #[test]
    fn test_plan_totals() {
        let plan = sample_plan();
        assert_eq!(plan.batch_count(), 2);
        assert_eq!(plan.job_count(), 3);
        assert!((plan.total_time() - 270.0).abs() < 1e-10);
        assert_eq!(plan.print_order(), vec!["M1", "M2", "M3"]);
    }

    #[test]
    fn test_batch_timeline() {
        let plan = sample_plan();
        assert!((plan.batches[0].end_time() - 120.0).abs() < 1e-10);
        assert!((plan.batches[1].end_time() - 270.0).abs() < 1e-10);
        assert_eq!(plan.batches[1].item_count(), 1);
    }

    #[test]
    fn test_batch_of() {
        let plan = sample_plan();
        assert_eq!(plan.batch_of("M2").unwrap().job_ids, vec!["M1", "M2"]);
        assert!(plan.batch_of("M9").is_none());
    }

    #[test]
    fn test_empty_plan() {
        let result = ScheduleResult::from(BatchPlan::new());
        assert!(result.is_empty());
        assert_eq!(result.total_time, 0.0);
    }

    #[test]
    fn test_empty_result_total_is_positive_zero() {
        let result = BatchPlan::new().to_result();
        assert!(!result.total_time.is_sign_negative());
        assert_eq!(
            serde_json::to_value(result).unwrap(),
            serde_json::json!({"print_order": [], "total_time": 0.0})
        );
    }

    #[test]
    fn test_result_serialized_shape() {
        let value = serde_json::to_value(sample_plan().to_result()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"print_order": ["M1", "M2", "M3"], "total_time": 270.0})
        );
    }
}
