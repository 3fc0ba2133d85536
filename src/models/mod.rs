//! Batch planning domain models.
//!
//! Provides the data types for describing a batch planning request
//! and its solution.
//!
//! # Domain Mappings
//!
//! | batch-plan | 3D Printing | Heat Treatment | Laundry |
//! |------------|-------------|----------------|---------|
//! | Job | Print model | Part lot | Load item |
//! | MachineConstraints | Build plate | Furnace | Drum |
//! | PlannedBatch | Print run | Furnace charge | Wash cycle |

mod job;
mod machine;
mod schedule;

pub use job::{Job, MAX_PRIORITY, MIN_PRIORITY};
pub use machine::MachineConstraints;
pub use schedule::{BatchPlan, PlannedBatch, ScheduleResult};
