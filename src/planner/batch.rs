//! Open-batch accumulator and the packing state transition.
//!
//! The planner folds the priority-sorted job list through
//! [`PlanState::advance`]. Each step either appends the job to the open
//! batch or seals the open batch onto the timeline and starts a new one
//! holding only that job. A sealed batch is never reopened.

use tracing::debug;

use crate::models::{BatchPlan, Job, MachineConstraints, PlannedBatch};

/// The batch currently being filled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpenBatch {
    job_ids: Vec<String>,
    volume: f64,
    duration: f64,
}

impl OpenBatch {
    /// Creates an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a batch holding a single job.
    pub fn starting_with(job: &Job) -> Self {
        let mut batch = Self::new();
        batch.push(job);
        batch
    }

    /// Whether the batch holds no jobs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.job_ids.is_empty()
    }

    /// Number of jobs in the batch.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.job_ids.len()
    }

    /// Accumulated volume.
    #[inline]
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Longest member duration so far (0 when empty).
    #[inline]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Member IDs in insertion order.
    pub fn job_ids(&self) -> &[String] {
        &self.job_ids
    }

    /// Whether `job` can join without breaking either machine limit.
    ///
    /// Both the item count and the volume sum are checked after insertion.
    pub fn admits(&self, job: &Job, constraints: &MachineConstraints) -> bool {
        let max_items = usize::try_from(constraints.max_items).unwrap_or(0);
        self.item_count() < max_items && self.volume + job.volume <= constraints.max_volume
    }

    /// Appends a job without checking limits.
    pub fn push(&mut self, job: &Job) {
        self.job_ids.push(job.id.clone());
        self.volume += job.volume;
        self.duration = self.duration.max(job.duration);
    }

    /// Closes the batch at the given start time.
    pub fn seal(self, start_time: f64) -> PlannedBatch {
        PlannedBatch {
            job_ids: self.job_ids,
            volume: self.volume,
            duration: self.duration,
            start_time,
        }
    }
}

/// Packing state threaded through the fold over sorted jobs.
#[derive(Debug, Clone, Default)]
pub struct PlanState {
    open: OpenBatch,
    sealed: BatchPlan,
    clock: f64,
}

impl PlanState {
    /// Initial state: no sealed batches, empty open batch, clock at 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes one job.
    ///
    /// Joins the open batch if both limits hold afterwards; otherwise seals
    /// the open batch and starts a new one with `job`.
    pub fn advance(mut self, job: &Job, constraints: &MachineConstraints) -> Self {
        if self.open.admits(job, constraints) {
            self.open.push(job);
        } else {
            self.flush();
            self.open = OpenBatch::starting_with(job);
        }
        self
    }

    /// Seals the trailing batch and returns the finished plan.
    pub fn finish(mut self) -> BatchPlan {
        self.flush();
        self.sealed
    }

    /// The batch being filled.
    pub fn open_batch(&self) -> &OpenBatch {
        &self.open
    }

    /// Batches sealed so far.
    pub fn sealed(&self) -> &BatchPlan {
        &self.sealed
    }

    /// End time of the last sealed batch.
    pub fn clock(&self) -> f64 {
        self.clock
    }

    fn flush(&mut self) {
        if self.open.is_empty() {
            return;
        }
        let batch = std::mem::take(&mut self.open).seal(self.clock);
        self.clock = batch.end_time();

        debug!(
            index = self.sealed.batch_count(),
            items = batch.item_count(),
            volume = batch.volume,
            duration = batch.duration,
            start_time = batch.start_time,
            "sealed batch"
        );
        self.sealed.push(batch);
    }
}
