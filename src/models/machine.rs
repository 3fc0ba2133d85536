//! Machine constraints.
//!
//! The batch limits of the single processing device that every
//! job is planned onto.

use serde::{Deserialize, Serialize};

/// Per-batch limits of the target machine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MachineConstraints {
    /// Maximum cumulative job volume in one batch.
    pub max_volume: f64,
    /// Maximum number of jobs in one batch.
    pub max_items: i64,
}

impl MachineConstraints {
    /// Creates machine constraints.
    pub fn new(max_volume: f64, max_items: i64) -> Self {
        Self {
            max_volume,
            max_items,
        }
    }

    /// Whether both limits are strictly positive.
    ///
    /// A NaN `max_volume` is never valid.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.max_volume > 0.0 && self.max_items > 0
    }
}
