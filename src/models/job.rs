//! Job model.
//!
//! A job is a discrete unit of work that occupies part of a machine batch.
//! It consumes physical volume, belongs to a priority tier, and takes a
//! fixed processing time once its batch starts.

use serde::{Deserialize, Serialize};

/// Highest priority tier (scheduled first).
pub const MIN_PRIORITY: i64 = 1;

/// Lowest priority tier (scheduled last).
pub const MAX_PRIORITY: i64 = 3;

/// A job to be packed into a machine batch.
///
/// Fields are kept as raw values so that out-of-range input can be
/// reported by [`validate_input`](crate::validation::validate_input)
/// instead of failing at construction. Priority must still be an integer
/// that fits `i64`; fractional values such as `1.0` fail deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Opaque identifier, used only for reporting the print order.
    pub id: String,
    /// Physical volume occupied on the machine.
    pub volume: f64,
    /// Priority tier in `1..=3` (lower = scheduled earlier).
    pub priority: i64,
    /// Processing time once the batch starts.
    #[serde(alias = "print_time")]
    pub duration: f64,
}

impl Job {
    /// Creates a new job.
    pub fn new(id: impl Into<String>, volume: f64, priority: i64, duration: f64) -> Self {
        Self {
            id: id.into(),
            volume,
            priority,
            duration,
        }
    }

    /// Sets the volume.
    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = volume;
        self
    }

    /// Sets the priority tier.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the processing duration.
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    /// Whether the priority lies in the supported tier range.
    #[inline]
    pub fn has_valid_priority(&self) -> bool {
        (MIN_PRIORITY..=MAX_PRIORITY).contains(&self.priority)
    }
}
