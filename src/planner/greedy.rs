//! Greedy priority-ordered batch planner.
//!
//! # Algorithm
//!
//! 1. Validate the machine constraints and every job.
//! 2. Stable-sort jobs by ascending priority (ties keep input order).
//! 3. Fold the sorted jobs through [`PlanState::advance`]: a job joins the
//!    open batch while both the item limit and the volume limit hold,
//!    otherwise the open batch is sealed and a new one starts with the job.
//! 4. Seal the trailing batch.
//!
//! Each batch costs the longest duration among its members; the total
//! time is the sum over batches. The heuristic is one-pass with no
//! look-ahead or repacking, so it is neither time- nor batch-optimal.
//!
//! # Complexity
//! O(n log n) for the sort plus O(n) for the packing pass.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::batch::PlanState;
use crate::models::{BatchPlan, Job, MachineConstraints, ScheduleResult};
use crate::validation::{validate_input, ValidationError};

/// Input container for batch planning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Jobs to plan.
    pub jobs: Vec<Job>,
    /// Target machine limits.
    pub constraints: MachineConstraints,
}

impl PlanRequest {
    /// Creates a new plan request.
    pub fn new(jobs: Vec<Job>, constraints: MachineConstraints) -> Self {
        Self { jobs, constraints }
    }

    /// Adds a job.
    pub fn with_job(mut self, job: Job) -> Self {
        self.jobs.push(job);
        self
    }
}

/// Greedy batch planner for a single machine.
///
/// # Example
///
/// ```
/// use batch_plan::models::{Job, MachineConstraints};
/// use batch_plan::planner::BatchPlanner;
///
/// let jobs = vec![
///     Job::new("M1", 100.0, 2, 120.0),
///     Job::new("M2", 150.0, 1, 90.0),
///     Job::new("M3", 120.0, 3, 150.0),
/// ];
/// let planner = BatchPlanner::new(MachineConstraints::new(300.0, 2));
///
/// let result = planner.plan(&jobs).unwrap();
/// assert_eq!(result.print_order, vec!["M2", "M1", "M3"]);
/// assert_eq!(result.total_time, 270.0);
/// ```
#[derive(Debug, Clone)]
pub struct BatchPlanner {
    constraints: MachineConstraints,
}

impl BatchPlanner {
    /// Creates a planner for the given machine.
    pub fn new(constraints: MachineConstraints) -> Self {
        Self { constraints }
    }

    /// Machine limits used by this planner.
    pub fn constraints(&self) -> &MachineConstraints {
        &self.constraints
    }

    /// Plans jobs and returns the print order and total time.
    ///
    /// Fails with the first validation error; no partial result is produced.
    pub fn plan(&self, jobs: &[Job]) -> Result<ScheduleResult, ValidationError> {
        Ok(self.plan_batches(jobs)?.into())
    }

    /// Plans jobs and returns the full batch breakdown.
    pub fn plan_batches(&self, jobs: &[Job]) -> Result<BatchPlan, ValidationError> {
        validate_input(jobs, &self.constraints)?;

        let plan = sort_by_priority(jobs)
            .into_iter()
            .fold(PlanState::new(), |state, job| {
                state.advance(job, &self.constraints)
            })
            .finish();

        debug!(
            jobs = plan.job_count(),
            batches = plan.batch_count(),
            total_time = plan.total_time(),
            "batch plan complete"
        );
        Ok(plan)
    }
}

/// Plans a request.
pub fn plan_request(request: &PlanRequest) -> Result<ScheduleResult, ValidationError> {
    BatchPlanner::new(request.constraints).plan(&request.jobs)
}

/// Jobs ordered by ascending priority; equal priorities keep input order.
fn sort_by_priority(jobs: &[Job]) -> Vec<&Job> {
    let mut sorted: Vec<&Job> = jobs.iter().collect();
    sorted.sort_by_key(|job| job.priority);
    sorted
}
